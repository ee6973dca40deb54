use crate::schema::feedback;
use derive_builder::Builder;
use diesel::dsl::FindBy;
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Builder, Queryable, Identifiable, Clone)]
#[diesel(table_name = feedback)]
#[builder(
  derive(AsChangeset, Insertable),
  pattern = "owned",
  name = "FeedbackChangeset"
)]
#[builder_struct_attr(diesel(table_name = feedback))]
pub struct Feedback {
  pub id: Uuid,
  pub reel_id: Uuid,
  pub coach_id: Uuid,
  pub content: String,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

impl Feedback {
  pub fn find_by_reel_id(reel_id: &Uuid) -> FindBy<feedback::table, feedback::reel_id, Uuid> {
    feedback::table.filter(feedback::reel_id.eq(*reel_id))
  }
}
