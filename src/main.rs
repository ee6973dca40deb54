#[macro_use]
extern crate rocket;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use dotenv::dotenv;
use reelcoach_api::config::Config;
use reelcoach_api::fairings::SentryFairing;
use reelcoach_api::guards::DbConn;
use reelcoach_api::routes;
use rocket::fairing::AdHoc;
use rocket::figment::providers::{Env, Serialized};
use rocket::{Build, Rocket};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

async fn run_migrations(rocket: Rocket<Build>) -> Rocket<Build> {
  let db_conn = DbConn::get_one(&rocket)
    .await
    .expect("failed to get db connection");

  db_conn
    .run(|conn| {
      conn
        .run_pending_migrations(MIGRATIONS)
        .expect("failed to run migrations");
    })
    .await;

  rocket
}

#[launch]
fn rocket() -> Rocket<Build> {
  dotenv().ok();

  let mut figment = rocket::Config::figment()
    .merge(Serialized::defaults(Config::default()))
    .merge(Env::prefixed("REELCOACH_").global());

  if let Some(database_url) = Env::var("DATABASE_URL") {
    figment = figment.merge(("databases.default.url", database_url));
  }

  let config: Config = figment.extract().expect("invalid configuration");

  rocket::custom(figment)
    .attach(SentryFairing::fairing(config.sentry_dsn.clone()))
    .attach(DbConn::fairing())
    .attach(AdHoc::on_ignite("Run Migrations", run_migrations))
    .attach(AdHoc::config::<Config>())
    .mount(
      "/",
      routes![
        routes::index::get_health,
        routes::sessions::create,
        routes::users::create,
        routes::users::get_me,
        routes::users::update_me,
        routes::creator::reels::create,
        routes::creator::reels::list,
        routes::creator::reels::get,
        routes::coach::reels::list_pending,
        routes::coach::reels::list_reviewed,
        routes::coach::feedback::create,
        routes::coach::feedback::get,
      ],
    )
}
