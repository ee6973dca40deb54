use crate::guards::auth::Coach;
use crate::guards::{Auth, DbConn, Jwt};
use crate::models::{Feedback, FeedbackChangeset, Reel, User};
use crate::response::{MutationError, MutationResponse, QueryResponse, Response};
use crate::schema::feedback;
use crate::views::FeedbackView;
use diesel::prelude::*;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateFeedbackRequest {
  reel_id: Uuid,
  #[validate(length(min = 1))]
  content: String,
}

#[post("/coach/feedback", data = "<feedback>")]
pub async fn create(
  feedback: Json<CreateFeedbackRequest>,
  auth: Auth<Jwt<Coach>>,
  db_conn: DbConn,
) -> MutationResponse<FeedbackView> {
  if let Err(errors) = feedback.validate() {
    return Response::validation_error(errors);
  }

  let coach = auth.into_deep_inner().into_user();
  let coach_name = coach.name.clone();
  let reel_id = feedback.reel_id;

  db_conn
    .run(move |conn| Reel::find_by_id(&reel_id).first::<Reel>(conn))
    .await
    .map_err(|_| MutationError::Status(Status::UnprocessableEntity))?;

  // The unique constraint on reel_id turns a second review into a 409.
  let feedback: Feedback = db_conn
    .run(move |conn| {
      diesel::insert_into(feedback::table)
        .values(
          FeedbackChangeset::default()
            .reel_id(feedback.reel_id)
            .coach_id(coach.id)
            .content(feedback.content.clone()),
        )
        .get_result::<Feedback>(conn)
    })
    .await?;

  Response::success(FeedbackView::new(feedback, coach_name))
}

#[get("/coach/feedback/<reel_id>")]
pub async fn get(
  reel_id: Uuid,
  _auth: Auth<Jwt<Coach>>,
  db_conn: DbConn,
) -> QueryResponse<FeedbackView> {
  let feedback: Feedback = db_conn
    .run(move |conn| Feedback::find_by_reel_id(&reel_id).first::<Feedback>(conn))
    .await?;

  let coach_id = feedback.coach_id;

  let coach: User = db_conn
    .run(move |conn| User::find_by_id(&coach_id).first::<User>(conn))
    .await?;

  Response::success(FeedbackView::new(feedback, coach.name))
}
