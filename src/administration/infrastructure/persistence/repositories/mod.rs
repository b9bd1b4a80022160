pub mod cloud;
pub mod postgres;
pub mod postgres_database_administration_repository;
