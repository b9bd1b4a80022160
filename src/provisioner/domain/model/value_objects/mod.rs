pub mod postgres_identifier;
pub mod user_credentials;
