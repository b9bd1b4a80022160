use crate::administration::domain::model::value_objects::{
    sql_identifier::{quote_identifier, quote_literal},
    table_privileges::TablePrivileges,
};

pub fn create_database(database_name: &str) -> String {
    format!("CREATE DATABASE {}", quote_identifier(database_name))
}

pub fn alter_database_owner(database_name: &str, owner_role: &str) -> String {
    format!(
        "ALTER DATABASE {} OWNER TO {}",
        quote_identifier(database_name),
        quote_identifier(owner_role)
    )
}

pub fn grant_create_on_database(database_name: &str, role: &str) -> String {
    format!(
        "GRANT CREATE ON DATABASE {} TO {}",
        quote_identifier(database_name),
        quote_identifier(role)
    )
}

pub fn database_owner(database_name: &str) -> String {
    format!(
        "SELECT pg_catalog.pg_get_userbyid(d.datdba) FROM pg_catalog.pg_database d WHERE d.datname = {}",
        quote_literal(database_name)
    )
}

pub fn role_name(role: &str) -> String {
    format!(
        "SELECT r.rolname FROM pg_catalog.pg_roles r WHERE r.rolname = {}",
        quote_literal(role)
    )
}

pub fn revoke_connect(database_name: &str) -> String {
    format!("REVOKE CONNECT ON DATABASE {} FROM PUBLIC", quote_identifier(database_name))
}

pub fn terminate_backends(database_name: &str) -> String {
    format!(
        "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = {} AND pid <> pg_backend_pid()",
        quote_literal(database_name)
    )
}

pub fn drop_database(database_name: &str) -> String {
    format!("DROP DATABASE {}", quote_identifier(database_name))
}

pub fn create_schema(schema: &str, owner_role: &str) -> String {
    format!(
        "CREATE SCHEMA {} AUTHORIZATION {}",
        quote_identifier(schema),
        quote_identifier(owner_role)
    )
}

pub fn create_extension(extension: &str) -> String {
    format!("CREATE EXTENSION {}", quote_identifier(extension))
}

pub fn grant_usage_on_schema(schema: &str, role: &str) -> String {
    format!(
        "GRANT USAGE ON SCHEMA {} TO {}",
        quote_identifier(schema),
        quote_identifier(role)
    )
}

pub fn grant_on_all_tables(privileges: &TablePrivileges, schema: &str, role: &str) -> String {
    format!(
        "GRANT {} ON ALL TABLES IN SCHEMA {} TO {}",
        privileges.to_sql(),
        quote_identifier(schema),
        quote_identifier(role)
    )
}

pub fn alter_default_privileges(
    creator: &str,
    schema: &str,
    privileges: &TablePrivileges,
    role: &str,
) -> String {
    format!(
        "ALTER DEFAULT PRIVILEGES FOR ROLE {} IN SCHEMA {} GRANT {} ON TABLES TO {}",
        quote_identifier(creator),
        quote_identifier(schema),
        privileges.to_sql(),
        quote_identifier(role)
    )
}

pub fn grant_create_on_schema(schema: &str, role: &str) -> String {
    format!(
        "GRANT CREATE ON SCHEMA {} TO {}",
        quote_identifier(schema),
        quote_identifier(role)
    )
}

pub fn create_group_role(role: &str) -> String {
    format!("CREATE ROLE {}", quote_identifier(role))
}

pub fn create_user_role(role: &str, password: &str) -> String {
    format!(
        "CREATE ROLE {} WITH LOGIN PASSWORD {}",
        quote_identifier(role),
        quote_literal(password)
    )
}

pub fn update_password(role: &str, password: &str) -> String {
    format!(
        "ALTER ROLE {} WITH PASSWORD {}",
        quote_identifier(role),
        quote_literal(password)
    )
}

pub fn grant_role(role: &str, grantee: &str) -> String {
    format!("GRANT {} TO {}", quote_identifier(role), quote_identifier(grantee))
}

pub fn revoke_role(role: &str, revoked: &str) -> String {
    format!("REVOKE {} FROM {}", quote_identifier(role), quote_identifier(revoked))
}

pub fn alter_default_login_role(role: &str, set_role: &str) -> String {
    format!(
        "ALTER USER {} SET ROLE {}",
        quote_identifier(role),
        quote_identifier(set_role)
    )
}

pub fn reassign_owned(role: &str, new_owner: &str) -> String {
    format!(
        "REASSIGN OWNED BY {} TO {}",
        quote_identifier(role),
        quote_identifier(new_owner)
    )
}

pub fn drop_owned(role: &str) -> String {
    format!("DROP OWNED BY {}", quote_identifier(role))
}

pub fn drop_role(role: &str) -> String {
    format!("DROP ROLE {}", quote_identifier(role))
}
