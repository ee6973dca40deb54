pub mod jwt;

pub use jwt::{Coach, Creator, Jwt};

use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
  #[error("missing authorization header")]
  Missing,
  #[error("invalid token: {0}")]
  Invalid(String),
  #[error("{0} not found")]
  NotFound(String),
}

impl From<AuthError> for (Status, AuthError) {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::Missing => (Status::Unauthorized, error),
      AuthError::Invalid(_) => (Status::BadRequest, error),
      AuthError::NotFound(_) => (Status::Unauthorized, error),
    }
  }
}

pub struct Auth<T>(pub T);

#[async_trait]
pub trait AuthFromRequest: Sized {
  async fn from_request(req: &Request<'_>) -> Result<Self, AuthError>;
}

#[rocket::async_trait]
impl<'r, T: AuthFromRequest + Send> FromRequest<'r> for Auth<T> {
  type Error = AuthError;

  async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
    match T::from_request(req).await {
      Ok(inner) => Outcome::Success(Auth(inner)),
      Err(error) => Outcome::Error(error.into()),
    }
  }
}
