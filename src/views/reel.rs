use crate::models::Reel;
use crate::views::FeedbackView;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
#[serde(rename = "Reel")]
pub struct ReelView {
  pub id: Uuid,
  pub url: String,
  pub creator_id: Uuid,
  pub creator_name: String,
  pub created_at: chrono::NaiveDateTime,
  pub feedback: Option<FeedbackView>,
}

impl ReelView {
  pub fn new(reel: Reel, creator_name: String, feedback: Option<FeedbackView>) -> Self {
    ReelView {
      id: reel.id,
      url: reel.url,
      creator_id: reel.creator_id,
      creator_name,
      created_at: reel.created_at,
      feedback,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Feedback;
  use chrono::Utc;

  #[test]
  fn carries_the_reel_fields_and_feedback() {
    let now = Utc::now().naive_utc();
    let reel = Reel {
      id: Uuid::new_v4(),
      creator_id: Uuid::new_v4(),
      url: "https://instagram.com/reel/abc123".to_owned(),
      created_at: now,
      updated_at: now,
    };

    let feedback = Feedback {
      id: Uuid::new_v4(),
      reel_id: reel.id,
      coach_id: Uuid::new_v4(),
      content: "Tighten the hook in the first two seconds.".to_owned(),
      created_at: now,
      updated_at: now,
    };

    let view = ReelView::new(
      reel.clone(),
      "Maya".to_owned(),
      Some(FeedbackView::new(feedback.clone(), "Coach Dan".to_owned())),
    );

    assert_eq!(view.id, reel.id);
    assert_eq!(view.creator_name, "Maya");

    let feedback_view = view.feedback.unwrap();
    assert_eq!(feedback_view.reel_id, reel.id);
    assert_eq!(feedback_view.coach_name, "Coach Dan");
    assert_eq!(feedback_view.content, feedback.content);
  }

  #[test]
  fn feedback_is_absent_for_an_unreviewed_reel() {
    let now = Utc::now().naive_utc();
    let reel = Reel {
      id: Uuid::new_v4(),
      creator_id: Uuid::new_v4(),
      url: "https://instagram.com/p/xyz".to_owned(),
      created_at: now,
      updated_at: now,
    };

    let view = ReelView::new(reel, "Maya".to_owned(), None);
    assert!(view.feedback.is_none());
  }
}
