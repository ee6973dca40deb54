use rocket::serde::json::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
  status: String,
}

#[get("/")]
pub async fn get_health() -> Json<Health> {
  Json(Health {
    status: "ok".into(),
  })
}
