pub mod sql_identifier;
pub mod table_privileges;
