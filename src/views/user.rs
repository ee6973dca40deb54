use crate::data_types::AccountType;
use crate::models::User;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
#[serde(rename = "User")]
pub struct UserView {
  pub id: Uuid,
  pub username: String,
  pub name: String,
  pub account_type: AccountType,
  pub created_at: chrono::NaiveDateTime,
}

impl From<User> for UserView {
  fn from(user: User) -> Self {
    UserView {
      id: user.id,
      username: user.username,
      name: user.name,
      account_type: user.account_type,
      created_at: user.created_at,
    }
  }
}
