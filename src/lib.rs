#[macro_use]
extern crate rocket;

pub mod auth;
pub mod config;
pub mod data_types;
pub mod fairings;
pub mod guards;
pub mod models;
pub mod response;
pub mod routes;
pub mod schema;
pub mod views;
