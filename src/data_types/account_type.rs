use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

#[derive(DbEnum, Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::AccountType"]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
  Creator,
  Coach,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_as_snake_case() {
    assert_eq!(
      serde_json::to_string(&AccountType::Creator).unwrap(),
      "\"creator\""
    );
    assert_eq!(
      serde_json::to_string(&AccountType::Coach).unwrap(),
      "\"coach\""
    );
  }

  #[test]
  fn deserializes_from_snake_case() {
    let parsed: AccountType = serde_json::from_str("\"coach\"").unwrap();
    assert_eq!(parsed, AccountType::Coach);
  }
}
