use async_trait::async_trait;
use tracing::{Instrument, Span, info};

use crate::administration::{
    domain::model::{
        entities::postgres_schema_privileges::PostgresSchemaPrivileges,
        enums::administration_domain_error::AdministrationDomainError,
    },
    infrastructure::persistence::repositories::{
        cloud::bootstrap_membership::{drop_role_as_member, grant_to_bootstrap},
        postgres::default_postgres_database_administration_repository_impl::DefaultPostgresDatabaseAdministrationRepositoryImpl,
        postgres_database_administration_repository::PostgresDatabaseAdministrationRepository,
    },
};

/// Roles Cloud SQL manages itself and never lets a client drop.
const RESERVED_ROLES: [&str; 2] = ["cloudsqlsuperuser", "cloudsqladmin"];

/// Google Cloud SQL. The administrative user is a `cloudsqlsuperuser`
/// member, which may only drop databases and roles it belongs to.
pub struct GcpPostgresDatabaseAdministrationRepositoryImpl {
    base: DefaultPostgresDatabaseAdministrationRepositoryImpl,
}

impl GcpPostgresDatabaseAdministrationRepositoryImpl {
    pub fn new(base: DefaultPostgresDatabaseAdministrationRepositoryImpl) -> Self {
        Self { base }
    }

    fn is_reserved(&self, role: &str) -> bool {
        RESERVED_ROLES.contains(&role) || role == self.base.user()
    }
}

#[async_trait]
impl PostgresDatabaseAdministrationRepository for GcpPostgresDatabaseAdministrationRepositoryImpl {
    async fn create_database(
        &self,
        database_name: &str,
        owner_role: &str,
    ) -> Result<(), AdministrationDomainError> {
        grant_to_bootstrap(&self.base, owner_role, self.base.user()).await?;
        self.base.create_database(database_name, owner_role).await
    }

    async fn create_schema(
        &self,
        database_name: &str,
        owner_role: &str,
        schema: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        self.base
            .create_schema(database_name, owner_role, schema, span)
            .await
    }

    async fn create_extension(
        &self,
        database_name: &str,
        extension: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        self.base.create_extension(database_name, extension, span).await
    }

    async fn create_group_role(&self, role: &str) -> Result<(), AdministrationDomainError> {
        self.base.create_group_role(role).await?;
        grant_to_bootstrap(&self.base, role, self.base.user()).await?;
        Ok(())
    }

    async fn create_user_role(
        &self,
        role: &str,
        password: &str,
    ) -> Result<String, AdministrationDomainError> {
        self.base.create_user_role(role, password).await
    }

    async fn update_password(
        &self,
        role: &str,
        password: &str,
    ) -> Result<(), AdministrationDomainError> {
        self.base.update_password(role, password).await
    }

    async fn grant_role(&self, role: &str, grantee: &str) -> Result<(), AdministrationDomainError> {
        self.base.grant_role(role, grantee).await
    }

    async fn set_schema_privileges(
        &self,
        privileges: &PostgresSchemaPrivileges,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        self.base.set_schema_privileges(privileges, span).await
    }

    async fn revoke_role(&self, role: &str, revoked: &str) -> Result<(), AdministrationDomainError> {
        self.base.revoke_role(role, revoked).await
    }

    async fn alter_default_login_role(
        &self,
        role: &str,
        set_role: &str,
    ) -> Result<(), AdministrationDomainError> {
        self.base.alter_default_login_role(role, set_role).await
    }

    async fn drop_database(
        &self,
        database_name: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        // Only the owner (or a member of the owning role) may drop a database.
        let owner = self
            .base
            .database_owner(database_name)
            .instrument(span.clone())
            .await?;
        if let Some(owner) = owner {
            grant_to_bootstrap(&self.base, &owner, self.base.user()).await?;
        }

        self.base.drop_database(database_name, span).await
    }

    async fn drop_role(
        &self,
        role: &str,
        new_owner: &str,
        database_name: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        if self.is_reserved(role) {
            info!(parent: span, role, "role is managed by Cloud SQL; leaving it in place");
            return Ok(());
        }

        drop_role_as_member(
            &self.base,
            self.base.user(),
            role,
            new_owner,
            database_name,
            span,
        )
        .await
    }

    async fn role_exists(&self, role: &str) -> Result<bool, AdministrationDomainError> {
        self.base.role_exists(role).await
    }

    fn user(&self) -> &str {
        self.base.user()
    }

    fn default_database(&self) -> &str {
        self.base.default_database()
    }
}
