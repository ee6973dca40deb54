mod account_type;

pub use account_type::AccountType;
