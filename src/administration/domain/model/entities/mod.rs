pub mod postgres_schema_privileges;
