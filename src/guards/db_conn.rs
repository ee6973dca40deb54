use rocket_sync_db_pools::database;

#[database("default")]
pub struct DbConn(pub diesel::PgConnection);
