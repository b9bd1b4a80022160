pub mod connection_settings;
pub mod postgres_connection_provider;
pub mod postgres_server_connection;
pub mod sqlx_postgres_server_connection_impl;
