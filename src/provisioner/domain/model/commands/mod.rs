pub mod apply_postgres_database_command;
pub mod apply_postgres_user_command;
pub mod delete_postgres_database_command;
pub mod delete_postgres_user_command;
