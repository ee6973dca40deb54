use diesel::result::DatabaseErrorKind;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{response, Request};
use validator::ValidationErrors;

pub enum MutationError {
  ValidationErrors(ValidationErrors),
  Status(Status),
}

pub enum QueryError {
  Status(Status),
}

pub type MutationResponse<T> = Result<Json<T>, MutationError>;
pub type QueryResponse<T> = Result<Json<T>, QueryError>;
pub struct Response;

impl Response {
  pub fn success<T, E>(response: T) -> Result<Json<T>, E> {
    Ok(Json(response))
  }

  pub fn query_error<T>(status: Status) -> Result<Json<T>, QueryError> {
    Err(QueryError::Status(status))
  }

  pub fn validation_error<T>(errors: ValidationErrors) -> Result<Json<T>, MutationError> {
    Err(MutationError::ValidationErrors(errors))
  }

  pub fn mutation_error<T>(status: Status) -> Result<Json<T>, MutationError> {
    Err(MutationError::Status(status))
  }
}

impl<'r> Responder<'r, 'static> for MutationError {
  fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
    match self {
      MutationError::Status(status) => status.respond_to(req),
      MutationError::ValidationErrors(errors) => {
        Custom(Status::UnprocessableEntity, Json(errors)).respond_to(req)
      }
    }
  }
}

impl<'r> Responder<'r, 'static> for QueryError {
  fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
    match self {
      QueryError::Status(status) => status.respond_to(req),
    }
  }
}

fn status_for(error: &diesel::result::Error) -> Status {
  match error {
    diesel::result::Error::NotFound => Status::NotFound,
    diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => Status::Conflict,
    _ => Status::InternalServerError,
  }
}

impl From<diesel::result::Error> for MutationError {
  fn from(error: diesel::result::Error) -> Self {
    MutationError::Status(status_for(&error))
  }
}

impl From<diesel::result::Error> for QueryError {
  fn from(error: diesel::result::Error) -> Self {
    QueryError::Status(status_for(&error))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn unique_violation() -> diesel::result::Error {
    diesel::result::Error::DatabaseError(
      DatabaseErrorKind::UniqueViolation,
      Box::new("duplicate key value violates unique constraint".to_string()),
    )
  }

  #[test]
  fn not_found_maps_to_404() {
    assert_eq!(status_for(&diesel::result::Error::NotFound), Status::NotFound);
  }

  #[test]
  fn unique_violation_maps_to_409() {
    assert_eq!(status_for(&unique_violation()), Status::Conflict);
  }

  #[test]
  fn other_database_errors_map_to_500() {
    let error = diesel::result::Error::DatabaseError(
      DatabaseErrorKind::ForeignKeyViolation,
      Box::new("insert or update violates foreign key constraint".to_string()),
    );

    assert_eq!(status_for(&error), Status::InternalServerError);
  }

  #[test]
  fn mutation_error_wraps_the_status() {
    match MutationError::from(unique_violation()) {
      MutationError::Status(status) => assert_eq!(status, Status::Conflict),
      MutationError::ValidationErrors(_) => panic!("expected a status error"),
    }
  }
}
