use crate::data_types::AccountType;
use crate::schema::users;
use derive_builder::Builder;
use diesel::dsl::{Find, FindBy};
use diesel::helper_types::{EqAny, Filter};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Builder, Queryable, Identifiable, Clone)]
#[builder(
  derive(AsChangeset, Insertable),
  pattern = "owned",
  name = "UserChangeset"
)]
#[builder_struct_attr(diesel(table_name = users))]
pub struct User {
  pub id: Uuid,
  pub username: String,
  pub name: String,
  pub password: String,
  pub account_type: AccountType,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

impl User {
  pub fn find_by_id(id: &Uuid) -> Find<users::table, Uuid> {
    users::table.find(*id)
  }

  pub fn find_by_username(username: &str) -> FindBy<users::table, users::username, String> {
    users::table.filter(users::username.eq(username.to_string()))
  }

  pub fn filter_by_ids(ids: Vec<Uuid>) -> Filter<users::table, EqAny<users::id, Vec<Uuid>>> {
    users::table.filter(users::id.eq_any(ids))
  }
}
