use std::sync::Mutex;

use async_trait::async_trait;
use postgres_operator::{
    administration::{
        domain::model::{
            entities::postgres_schema_privileges::PostgresSchemaPrivileges,
            enums::administration_domain_error::AdministrationDomainError,
        },
        infrastructure::persistence::repositories::postgres_database_administration_repository::PostgresDatabaseAdministrationRepository,
    },
    provisioner::domain::services::credential_generator::CredentialGenerator,
};
use tracing::Span;

#[derive(Default)]
struct FakeAdministrationState {
    calls: Vec<String>,
    failing: Vec<String>,
    missing_roles: Vec<String>,
}

/// Records each capability call as a short line such as
/// `create_group_role appdb-group`. Calls whose line starts with a registered
/// prefix fail with `53100`. Role lookups are answered but not recorded; every
/// role exists unless registered as missing.
pub struct FakePostgresAdministrationRepository {
    state: Mutex<FakeAdministrationState>,
}

impl FakePostgresAdministrationRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeAdministrationState::default()),
        }
    }

    pub fn failing_on(prefixes: &[&str]) -> Self {
        let fake = Self::new();
        fake.state.lock().expect("mutex poisoned").failing =
            prefixes.iter().map(|prefix| prefix.to_string()).collect();
        fake
    }

    pub fn without_roles(self, roles: &[&str]) -> Self {
        self.state.lock().expect("mutex poisoned").missing_roles =
            roles.iter().map(|role| role.to_string()).collect();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").calls.clone()
    }

    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(prefix))
            .collect()
    }

    fn record(&self, call: String) -> Result<(), AdministrationDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let fails = state.failing.iter().any(|prefix| call.starts_with(prefix.as_str()));
        state.calls.push(call.clone());

        if fails {
            Err(AdministrationDomainError::database("53100", format!("disk full during {call}")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PostgresDatabaseAdministrationRepository for FakePostgresAdministrationRepository {
    async fn create_database(
        &self,
        database_name: &str,
        owner_role: &str,
    ) -> Result<(), AdministrationDomainError> {
        self.record(format!("create_database {database_name} {owner_role}"))
    }

    async fn create_schema(
        &self,
        database_name: &str,
        owner_role: &str,
        schema: &str,
        _span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        self.record(format!("create_schema {database_name} {owner_role} {schema}"))
    }

    async fn create_extension(
        &self,
        database_name: &str,
        extension: &str,
        _span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        self.record(format!("create_extension {database_name} {extension}"))
    }

    async fn create_group_role(&self, role: &str) -> Result<(), AdministrationDomainError> {
        self.record(format!("create_group_role {role}"))
    }

    async fn create_user_role(
        &self,
        role: &str,
        password: &str,
    ) -> Result<String, AdministrationDomainError> {
        self.record(format!("create_user_role {role} {password}"))?;
        self.state
            .lock()
            .expect("mutex poisoned")
            .missing_roles
            .retain(|missing| missing != role);
        Ok(role.to_string())
    }

    async fn update_password(
        &self,
        role: &str,
        password: &str,
    ) -> Result<(), AdministrationDomainError> {
        self.record(format!("update_password {role} {password}"))
    }

    async fn grant_role(&self, role: &str, grantee: &str) -> Result<(), AdministrationDomainError> {
        self.record(format!("grant_role {role} {grantee}"))
    }

    async fn set_schema_privileges(
        &self,
        privileges: &PostgresSchemaPrivileges,
        _span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        self.record(format!(
            "set_schema_privileges {} {} {} {} {}",
            privileges.database,
            privileges.schema,
            privileges.role,
            privileges.privileges,
            privileges.create_schema
        ))
    }

    async fn revoke_role(&self, role: &str, revoked: &str) -> Result<(), AdministrationDomainError> {
        self.record(format!("revoke_role {role} {revoked}"))
    }

    async fn alter_default_login_role(
        &self,
        role: &str,
        set_role: &str,
    ) -> Result<(), AdministrationDomainError> {
        self.record(format!("alter_default_login_role {role} {set_role}"))
    }

    async fn drop_database(
        &self,
        database_name: &str,
        _span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        self.record(format!("drop_database {database_name}"))
    }

    async fn drop_role(
        &self,
        role: &str,
        new_owner: &str,
        database_name: &str,
        _span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        self.record(format!("drop_role {role} {new_owner} {database_name}"))
    }

    async fn role_exists(&self, role: &str) -> Result<bool, AdministrationDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(!state.missing_roles.iter().any(|missing| missing == role))
    }

    fn user(&self) -> &str {
        "admin@myserver"
    }

    fn bootstrap_role(&self) -> &str {
        "admin"
    }

    fn default_database(&self) -> &str {
        "postgres"
    }
}

pub struct FixedCredentialGenerator;

impl CredentialGenerator for FixedCredentialGenerator {
    fn role_suffix(&self) -> String {
        "abcde".to_string()
    }

    fn password(&self) -> String {
        "Secretpassword1".to_string()
    }
}
