use crate::auth::generate_token;
use crate::config::Config;
use crate::guards::DbConn;
use crate::models::User;
use crate::response::{MutationError, MutationResponse, Response};
use bcrypt::verify;
use diesel::prelude::*;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CreateSessionRequest {
  username: String,
  password: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
  pub token: String,
}

#[post("/sessions", data = "<session>")]
pub async fn create(
  session: Json<CreateSessionRequest>,
  config: &State<Config>,
  db_conn: DbConn,
) -> MutationResponse<CreateSessionResponse> {
  let session_password = session.password.clone();

  // An unknown username and a wrong password are indistinguishable to the caller.
  let user = match db_conn
    .run(move |conn| User::find_by_username(&session.username).get_result::<User>(conn))
    .await
  {
    Ok(user) => user,
    Err(_) => return Response::mutation_error(Status::Unauthorized),
  };

  let valid = verify(session_password, &user.password)
    .map_err(|_| MutationError::Status(Status::InternalServerError))?;

  if !valid {
    return Response::mutation_error(Status::Unauthorized);
  }

  let token = generate_token(&user, config);

  Response::success(CreateSessionResponse { token })
}
