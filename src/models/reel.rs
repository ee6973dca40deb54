use crate::schema::reels;
use derive_builder::Builder;
use diesel::dsl::Find;
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Builder, Queryable, Identifiable, Clone)]
#[builder(
  derive(AsChangeset, Insertable),
  pattern = "owned",
  name = "ReelChangeset"
)]
#[builder_struct_attr(diesel(table_name = reels))]
pub struct Reel {
  pub id: Uuid,
  pub creator_id: Uuid,
  pub url: String,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

impl Reel {
  pub fn find_by_id(id: &Uuid) -> Find<reels::table, Uuid> {
    reels::table.find(*id)
  }
}
