use super::{Auth, AuthError, AuthFromRequest};
use crate::auth::{decode_token, Claims};
use crate::config::Config;
use crate::data_types::AccountType;
use crate::guards::DbConn;
use crate::models::User;
use diesel::prelude::*;
use lazy_static::lazy_static;
use regex::Regex;
use rocket::{Request, State};
use uuid::Uuid;

lazy_static! {
  static ref JWT_REGEX: Regex = Regex::new(r"Bearer (?P<jwt>.+)").unwrap();
}

pub struct Jwt<T>(T);

impl<T> Jwt<T> {
  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T> Auth<Jwt<T>> {
  pub fn into_deep_inner(self) -> T {
    self.0.into_inner()
  }
}

/// A user whose token and account both carry the creator role.
pub struct Creator(pub User);

/// A user whose token and account both carry the coach role.
pub struct Coach(pub User);

impl Creator {
  pub fn into_user(self) -> User {
    self.0
  }
}

impl Coach {
  pub fn into_user(self) -> User {
    self.0
  }
}

#[async_trait]
pub trait FromJwt: Sized {
  async fn from_jwt(claims: &Claims, db_conn: &DbConn) -> Result<Self, AuthError>;
}

#[async_trait]
impl<T: FromJwt + Send> AuthFromRequest for Jwt<T> {
  async fn from_request(req: &Request<'_>) -> Result<Self, AuthError> {
    let config = req
      .guard::<&State<Config>>()
      .await
      .succeeded()
      .ok_or_else(|| AuthError::Invalid("configuration unavailable".to_string()))?;

    let db_conn = req
      .guard::<DbConn>()
      .await
      .succeeded()
      .ok_or_else(|| AuthError::Invalid("database unavailable".to_string()))?;

    let authorization = req
      .headers()
      .get_one("authorization")
      .ok_or(AuthError::Missing)?;

    let captures = JWT_REGEX
      .captures(authorization)
      .ok_or_else(|| AuthError::Invalid("malformed authorization header".to_string()))?;

    let jwt = captures
      .name("jwt")
      .ok_or_else(|| AuthError::Invalid("jwt not found in header".to_string()))?
      .as_str();

    let claims = decode_token(jwt, config).map_err(|e| AuthError::Invalid(e.to_string()))?;
    let inner = T::from_jwt(&claims, &db_conn).await?;

    Ok(Self(inner))
  }
}

fn user_id_from_sub(sub: &str, role: &str) -> Result<Uuid, AuthError> {
  let (prefix, id) = sub
    .split_once(':')
    .ok_or_else(|| AuthError::Invalid("malformed subject claim".to_string()))?;

  if prefix != role {
    return Err(AuthError::NotFound(role.to_string()));
  }

  Uuid::parse_str(id).map_err(|e| AuthError::Invalid(e.to_string()))
}

#[async_trait]
impl FromJwt for User {
  async fn from_jwt(claims: &Claims, db_conn: &DbConn) -> Result<Self, AuthError> {
    let (_, id) = claims
      .sub
      .split_once(':')
      .ok_or_else(|| AuthError::Invalid("malformed subject claim".to_string()))?;

    let uuid = Uuid::parse_str(id).map_err(|e| AuthError::Invalid(e.to_string()))?;

    let user = db_conn
      .run(move |conn| User::find_by_id(&uuid).first::<User>(conn))
      .await
      .map_err(|_| AuthError::NotFound("user".to_string()))?;

    Ok(user)
  }
}

#[async_trait]
impl FromJwt for Creator {
  async fn from_jwt(claims: &Claims, db_conn: &DbConn) -> Result<Self, AuthError> {
    let uuid = user_id_from_sub(&claims.sub, "creator")?;

    let user = db_conn
      .run(move |conn| User::find_by_id(&uuid).first::<User>(conn))
      .await
      .map_err(|_| AuthError::NotFound("creator".to_string()))?;

    if user.account_type != AccountType::Creator {
      return Err(AuthError::NotFound("creator".to_string()));
    }

    Ok(Creator(user))
  }
}

#[async_trait]
impl FromJwt for Coach {
  async fn from_jwt(claims: &Claims, db_conn: &DbConn) -> Result<Self, AuthError> {
    let uuid = user_id_from_sub(&claims.sub, "coach")?;

    let user = db_conn
      .run(move |conn| User::find_by_id(&uuid).first::<User>(conn))
      .await
      .map_err(|_| AuthError::NotFound("coach".to_string()))?;

    if user.account_type != AccountType::Coach {
      return Err(AuthError::NotFound("coach".to_string()));
    }

    Ok(Coach(user))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn extracts_the_jwt_from_a_bearer_header() {
    let captures = JWT_REGEX.captures("Bearer abc.def.ghi").unwrap();
    assert_eq!(captures.name("jwt").unwrap().as_str(), "abc.def.ghi");
  }

  #[test]
  fn rejects_a_header_without_a_bearer_prefix() {
    assert!(JWT_REGEX.captures("Basic abc").is_none());
  }

  #[test]
  fn parses_a_subject_with_the_expected_role() {
    let id = Uuid::new_v4();
    let sub = format!("coach:{}", id);
    assert_eq!(user_id_from_sub(&sub, "coach").unwrap(), id);
  }

  #[test]
  fn rejects_a_subject_with_a_different_role() {
    let sub = format!("creator:{}", Uuid::new_v4());
    assert!(matches!(
      user_id_from_sub(&sub, "coach"),
      Err(AuthError::NotFound(_))
    ));
  }

  #[test]
  fn rejects_a_subject_without_a_role_prefix() {
    assert!(matches!(
      user_id_from_sub("not-a-subject", "coach"),
      Err(AuthError::Invalid(_))
    ));
  }
}
