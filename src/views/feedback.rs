use crate::models::Feedback;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, Clone)]
#[serde(rename = "Feedback")]
pub struct FeedbackView {
  pub id: Uuid,
  pub reel_id: Uuid,
  pub coach_id: Uuid,
  pub coach_name: String,
  pub content: String,
  pub created_at: chrono::NaiveDateTime,
}

impl FeedbackView {
  pub fn new(feedback: Feedback, coach_name: String) -> Self {
    FeedbackView {
      id: feedback.id,
      reel_id: feedback.reel_id,
      coach_id: feedback.coach_id,
      coach_name,
      content: feedback.content,
      created_at: feedback.created_at,
    }
  }
}
