use crate::guards::auth::Coach;
use crate::guards::{Auth, DbConn, Jwt};
use crate::models::{Feedback, Reel, User};
use crate::response::{QueryResponse, Response};
use crate::schema::{feedback, reels, users};
use crate::views::{FeedbackView, ReelView};
use diesel::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;

#[get("/coach/reels/pending")]
pub async fn list_pending(
  _auth: Auth<Jwt<Coach>>,
  db_conn: DbConn,
) -> QueryResponse<Vec<ReelView>> {
  // Oldest first, so the review backlog is cleared in submission order.
  let rows: Vec<(Reel, User)> = db_conn
    .run(move |conn| {
      reels::table
        .inner_join(users::table.on(users::id.eq(reels::creator_id)))
        .left_join(feedback::table.on(feedback::reel_id.eq(reels::id)))
        .filter(feedback::id.is_null())
        .order(reels::created_at.asc())
        .select((reels::all_columns, users::all_columns))
        .load::<(Reel, User)>(conn)
    })
    .await?;

  let reel_views = rows
    .into_iter()
    .map(|(reel, creator)| ReelView::new(reel, creator.name, None))
    .collect();

  Response::success(reel_views)
}

#[get("/coach/reels/reviewed")]
pub async fn list_reviewed(
  _auth: Auth<Jwt<Coach>>,
  db_conn: DbConn,
) -> QueryResponse<Vec<ReelView>> {
  let rows: Vec<(Reel, Feedback, User)> = db_conn
    .run(move |conn| {
      reels::table
        .inner_join(feedback::table.on(feedback::reel_id.eq(reels::id)))
        .inner_join(users::table.on(users::id.eq(reels::creator_id)))
        .order(feedback::created_at.desc())
        .select((reels::all_columns, feedback::all_columns, users::all_columns))
        .load::<(Reel, Feedback, User)>(conn)
    })
    .await?;

  let coach_ids: Vec<Uuid> = rows.iter().map(|(_, feedback, _)| feedback.coach_id).collect();

  let coaches: HashMap<Uuid, String> = if coach_ids.is_empty() {
    HashMap::new()
  } else {
    db_conn
      .run(move |conn| User::filter_by_ids(coach_ids).load::<User>(conn))
      .await?
      .into_iter()
      .map(|coach| (coach.id, coach.name))
      .collect()
  };

  let reel_views = rows
    .into_iter()
    .map(|(reel, feedback, creator)| {
      let coach_name = coaches.get(&feedback.coach_id).cloned().unwrap_or_default();
      let feedback_view = FeedbackView::new(feedback, coach_name);

      ReelView::new(reel, creator.name, Some(feedback_view))
    })
    .collect();

  Response::success(reel_views)
}
