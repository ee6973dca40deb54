use crate::auth::generate_token;
use crate::config::Config;
use crate::data_types::AccountType;
use crate::guards::{Auth, DbConn, Jwt};
use crate::models::{User, UserChangeset};
use crate::response::{MutationError, MutationResponse, QueryResponse, Response};
use crate::routes::sessions::CreateSessionResponse;
use crate::schema::users;
use crate::views::UserView;
use bcrypt::{hash, DEFAULT_COST};
use diesel::prelude::*;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateUserRequest {
  #[validate(length(min = 3, max = 32))]
  username: String,
  #[validate(length(min = 1))]
  name: String,
  #[validate(length(min = 8))]
  password: String,
  account_type: AccountType,
}

#[derive(Deserialize, Validate)]
pub struct UpdateUserRequest {
  #[validate(length(min = 3, max = 32))]
  username: Option<String>,
  #[validate(length(min = 1))]
  name: Option<String>,
  #[validate(length(min = 8))]
  password: Option<String>,
}

#[post("/users", data = "<user>")]
pub async fn create(
  user: Json<CreateUserRequest>,
  config: &State<Config>,
  db_conn: DbConn,
) -> MutationResponse<CreateSessionResponse> {
  if let Err(errors) = user.validate() {
    return Response::validation_error(errors);
  }

  let password = hash(&user.password, DEFAULT_COST)
    .map_err(|_| MutationError::Status(Status::InternalServerError))?;

  // A duplicate username trips the unique constraint and surfaces as 409.
  let user: User = db_conn
    .run(move |conn| {
      diesel::insert_into(users::table)
        .values(
          UserChangeset::default()
            .username(user.username.clone())
            .name(user.name.clone())
            .password(password)
            .account_type(user.account_type),
        )
        .get_result::<User>(conn)
    })
    .await?;

  let token = generate_token(&user, config);

  Response::success(CreateSessionResponse { token })
}

#[get("/users/me")]
pub async fn get_me(auth: Auth<Jwt<User>>) -> QueryResponse<UserView> {
  Response::success(auth.into_deep_inner().into())
}

#[put("/users/me", data = "<user>")]
pub async fn update_me(
  user: Json<UpdateUserRequest>,
  auth: Auth<Jwt<User>>,
  db_conn: DbConn,
) -> MutationResponse<UserView> {
  if let Err(errors) = user.validate() {
    return Response::validation_error(errors);
  }

  let current = auth.into_deep_inner();

  if user.username.is_none() && user.name.is_none() && user.password.is_none() {
    return Response::success(current.into());
  }

  let mut changeset = UserChangeset::default();

  if let Some(username) = &user.username {
    changeset = changeset.username(username.clone());
  }

  if let Some(name) = &user.name {
    changeset = changeset.name(name.clone());
  }

  if let Some(password) = &user.password {
    let password = hash(password, DEFAULT_COST)
      .map_err(|_| MutationError::Status(Status::InternalServerError))?;

    changeset = changeset.password(password);
  }

  let user: User = db_conn
    .run(move |conn| {
      diesel::update(&current)
        .set(changeset)
        .get_result::<User>(conn)
    })
    .await?;

  Response::success(user.into())
}
