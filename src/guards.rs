pub mod auth;
pub mod db_conn;

pub use auth::{Auth, Jwt};
pub use db_conn::DbConn;
