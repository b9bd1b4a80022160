pub mod administration_statements;
pub mod default_postgres_database_administration_repository_impl;
