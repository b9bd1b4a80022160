use async_trait::async_trait;
use tracing::Span;

use crate::administration::domain::model::{
    entities::postgres_schema_privileges::PostgresSchemaPrivileges,
    enums::administration_domain_error::AdministrationDomainError,
};

/// Idempotent administrative operations on one PostgreSQL server.
///
/// Every create succeeds when the object already exists in the desired shape
/// and every drop succeeds when the object is already gone. Other failures
/// are returned as-is; nothing here retries.
#[async_trait]
pub trait PostgresDatabaseAdministrationRepository: Send + Sync {
    async fn create_database(
        &self,
        database_name: &str,
        owner_role: &str,
    ) -> Result<(), AdministrationDomainError>;

    async fn create_schema(
        &self,
        database_name: &str,
        owner_role: &str,
        schema: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError>;

    async fn create_extension(
        &self,
        database_name: &str,
        extension: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError>;

    async fn create_group_role(&self, role: &str) -> Result<(), AdministrationDomainError>;

    /// Returns the login name clients must use for the created role.
    async fn create_user_role(
        &self,
        role: &str,
        password: &str,
    ) -> Result<String, AdministrationDomainError>;

    async fn update_password(&self, role: &str, password: &str)
    -> Result<(), AdministrationDomainError>;

    async fn grant_role(&self, role: &str, grantee: &str) -> Result<(), AdministrationDomainError>;

    async fn set_schema_privileges(
        &self,
        privileges: &PostgresSchemaPrivileges,
        span: &Span,
    ) -> Result<(), AdministrationDomainError>;

    async fn revoke_role(&self, role: &str, revoked: &str) -> Result<(), AdministrationDomainError>;

    async fn alter_default_login_role(
        &self,
        role: &str,
        set_role: &str,
    ) -> Result<(), AdministrationDomainError>;

    async fn drop_database(
        &self,
        database_name: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError>;

    /// Hands everything `role` owns in `database_name` to `new_owner`, then
    /// drops the role.
    async fn drop_role(
        &self,
        role: &str,
        new_owner: &str,
        database_name: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError>;

    async fn role_exists(&self, role: &str) -> Result<bool, AdministrationDomainError>;

    fn user(&self) -> &str;

    /// Server-side role behind the administrative login.
    fn bootstrap_role(&self) -> &str {
        self.user()
    }

    fn default_database(&self) -> &str;
}
