pub mod coach;
pub mod creator;
pub mod index;
pub mod sessions;
pub mod users;
