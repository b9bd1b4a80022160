pub mod postgres_database;
pub mod postgres_user;
