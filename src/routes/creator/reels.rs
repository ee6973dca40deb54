use crate::guards::auth::Creator;
use crate::guards::{Auth, DbConn, Jwt};
use crate::models::{Feedback, Reel, ReelChangeset, User};
use crate::response::{MutationResponse, QueryResponse, Response};
use crate::schema::{feedback, reels};
use crate::views::{FeedbackView, ReelView};
use diesel::prelude::*;
use lazy_static::lazy_static;
use regex::Regex;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

lazy_static! {
  static ref REEL_URL_REGEX: Regex =
    Regex::new(r"instagram\.com/(reel|reels|p)/[A-Za-z0-9_-]+").unwrap();
}

#[derive(Deserialize, Validate)]
pub struct CreateReelRequest {
  #[validate(length(min = 1, max = 2048))]
  url: String,
}

#[post("/creator/reels", data = "<reel>")]
pub async fn create(
  reel: Json<CreateReelRequest>,
  auth: Auth<Jwt<Creator>>,
  db_conn: DbConn,
) -> MutationResponse<ReelView> {
  if let Err(errors) = reel.validate() {
    return Response::validation_error(errors);
  }

  if !REEL_URL_REGEX.is_match(&reel.url) {
    return Response::mutation_error(Status::UnprocessableEntity);
  }

  let creator = auth.into_deep_inner().into_user();
  let creator_name = creator.name.clone();

  let reel: Reel = db_conn
    .run(move |conn| {
      diesel::insert_into(reels::table)
        .values(
          ReelChangeset::default()
            .creator_id(creator.id)
            .url(reel.url.clone()),
        )
        .get_result::<Reel>(conn)
    })
    .await?;

  Response::success(ReelView::new(reel, creator_name, None))
}

#[get("/creator/reels")]
pub async fn list(auth: Auth<Jwt<Creator>>, db_conn: DbConn) -> QueryResponse<Vec<ReelView>> {
  let creator = auth.into_deep_inner().into_user();
  let creator_id = creator.id;
  let creator_name = creator.name.clone();

  let rows: Vec<(Reel, Option<Feedback>)> = db_conn
    .run(move |conn| {
      reels::table
        .left_join(feedback::table)
        .filter(reels::creator_id.eq(creator_id))
        .order(reels::created_at.desc())
        .load::<(Reel, Option<Feedback>)>(conn)
    })
    .await?;

  let coaches = coach_names(
    &db_conn,
    rows
      .iter()
      .filter_map(|(_, feedback)| feedback.as_ref().map(|feedback| feedback.coach_id))
      .collect(),
  )
  .await?;

  let reel_views = rows
    .into_iter()
    .map(|(reel, feedback)| {
      let feedback_view = feedback.map(|feedback| {
        let coach_name = coaches.get(&feedback.coach_id).cloned().unwrap_or_default();
        FeedbackView::new(feedback, coach_name)
      });

      ReelView::new(reel, creator_name.clone(), feedback_view)
    })
    .collect();

  Response::success(reel_views)
}

#[get("/creator/reels/<id>")]
pub async fn get(
  id: Uuid,
  auth: Auth<Jwt<Creator>>,
  db_conn: DbConn,
) -> QueryResponse<ReelView> {
  let creator = auth.into_deep_inner().into_user();
  let creator_id = creator.id;

  let (reel, feedback): (Reel, Option<Feedback>) = db_conn
    .run(move |conn| {
      reels::table
        .left_join(feedback::table)
        .filter(reels::id.eq(id).and(reels::creator_id.eq(creator_id)))
        .first::<(Reel, Option<Feedback>)>(conn)
    })
    .await?;

  let feedback_view = match feedback {
    Some(feedback) => {
      let coach_id = feedback.coach_id;

      let coach: User = db_conn
        .run(move |conn| User::find_by_id(&coach_id).first::<User>(conn))
        .await?;

      Some(FeedbackView::new(feedback, coach.name))
    }
    None => None,
  };

  Response::success(ReelView::new(reel, creator.name, feedback_view))
}

async fn coach_names(
  db_conn: &DbConn,
  ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, String>, diesel::result::Error> {
  if ids.is_empty() {
    return Ok(HashMap::new());
  }

  let coaches: Vec<User> = db_conn
    .run(move |conn| User::filter_by_ids(ids).load::<User>(conn))
    .await?;

  Ok(
    coaches
      .into_iter()
      .map(|coach| (coach.id, coach.name))
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_instagram_reel_urls() {
    assert!(REEL_URL_REGEX.is_match("https://www.instagram.com/reel/Cxy123_-/"));
    assert!(REEL_URL_REGEX.is_match("https://instagram.com/reels/AbC9"));
    assert!(REEL_URL_REGEX.is_match("https://www.instagram.com/p/DEf456"));
  }

  #[test]
  fn rejects_urls_outside_instagram() {
    assert!(!REEL_URL_REGEX.is_match("https://www.youtube.com/watch?v=abc"));
    assert!(!REEL_URL_REGEX.is_match("https://example.com/instagram/reel/abc"));
    assert!(!REEL_URL_REGEX.is_match("not a url"));
  }

  #[test]
  fn rejects_instagram_urls_that_are_not_posts() {
    assert!(!REEL_URL_REGEX.is_match("https://www.instagram.com/some_profile/"));
    assert!(!REEL_URL_REGEX.is_match("https://www.instagram.com/stories/user/123"));
  }
}
