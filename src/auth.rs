use crate::config::Config;
use crate::data_types::AccountType;
use crate::models::User;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Claims {
  pub sub: String,
  pub exp: usize,
  pub iss: String,
}

pub fn generate_token(user: &User, config: &Config) -> String {
  let now = Utc::now();
  let exp = (now + Duration::hours(24)).timestamp() as usize;

  let sub = match user.account_type {
    AccountType::Creator => format!("creator:{}", user.id),
    AccountType::Coach => format!("coach:{}", user.id),
  };

  let claims = Claims {
    sub,
    exp,
    iss: config.host.clone(),
  };

  let key = EncodingKey::from_secret(config.auth_client_secret.as_ref());
  encode(&Header::default(), &claims, &key).expect("failed to encode session token")
}

pub fn decode_token(token: &str, config: &Config) -> Result<Claims, jsonwebtoken::errors::Error> {
  let mut validation = Validation::new(Algorithm::HS256);

  validation.set_issuer(&[config.host.clone()]);

  let key = DecodingKey::from_secret(config.auth_client_secret.as_ref());

  decode::<Claims>(token, &key, &validation).map(|data| data.claims)
}

#[cfg(test)]
mod tests {
  use super::*;
  use uuid::Uuid;

  fn test_user(account_type: AccountType) -> User {
    User {
      id: Uuid::new_v4(),
      username: "maya".to_owned(),
      name: "Maya".to_owned(),
      password: "$2b$12$hash".to_owned(),
      account_type,
      created_at: Utc::now().naive_utc(),
      updated_at: Utc::now().naive_utc(),
    }
  }

  #[test]
  fn token_round_trips_for_creator() {
    let config = Config::default();
    let user = test_user(AccountType::Creator);
    let token = generate_token(&user, &config);
    let claims = decode_token(&token, &config).unwrap();

    assert_eq!(claims.sub, format!("creator:{}", user.id));
    assert_eq!(claims.iss, config.host);
  }

  #[test]
  fn token_round_trips_for_coach() {
    let config = Config::default();
    let user = test_user(AccountType::Coach);
    let token = generate_token(&user, &config);
    let claims = decode_token(&token, &config).unwrap();

    assert_eq!(claims.sub, format!("coach:{}", user.id));
  }

  #[test]
  fn token_is_rejected_with_a_different_secret() {
    let config = Config::default();
    let token = generate_token(&test_user(AccountType::Creator), &config);

    let other = Config {
      auth_client_secret: "another-secret".to_owned(),
      ..Config::default()
    };

    assert!(decode_token(&token, &other).is_err());
  }

  #[test]
  fn token_is_rejected_with_a_different_issuer() {
    let config = Config::default();
    let token = generate_token(&test_user(AccountType::Coach), &config);

    let other = Config {
      host: "http://elsewhere".to_owned(),
      ..Config::default()
    };

    assert!(decode_token(&token, &other).is_err());
  }
}
