use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
  pub auth_client_secret: String,
  pub host: String,
  pub sentry_dsn: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      auth_client_secret: "development-secret".to_owned(),
      host: "http://localhost:8000".to_owned(),
      sentry_dsn: None,
    }
  }
}
