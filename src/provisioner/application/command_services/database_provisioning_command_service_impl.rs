use std::sync::Arc;

use async_trait::async_trait;
use tracing::{Span, info, info_span, warn};

use crate::{
    administration::{
        domain::model::{
            entities::postgres_schema_privileges::PostgresSchemaPrivileges,
            enums::administration_domain_error::AdministrationDomainError,
        },
        infrastructure::persistence::repositories::postgres_database_administration_repository::PostgresDatabaseAdministrationRepository,
    },
    provisioner::domain::{
        model::{
            commands::{
                apply_postgres_database_command::ApplyPostgresDatabaseCommand,
                apply_postgres_user_command::ApplyPostgresUserCommand,
                delete_postgres_database_command::DeletePostgresDatabaseCommand,
                delete_postgres_user_command::DeletePostgresUserCommand,
            },
            entities::{
                postgres_database::{PostgresRoles, PostgresStatus},
                postgres_user::{PostgresUserStatus, ProvisionedUser},
            },
            enums::provisioner_domain_error::ProvisionerDomainError,
            value_objects::user_credentials::UserCredentials,
        },
        services::{
            credential_generator::CredentialGenerator,
            database_provisioning_command_service::DatabaseProvisioningCommandService,
        },
    },
};

const READER_PRIVILEGES: &str = "SELECT";
const WRITER_PRIVILEGES: &str = "SELECT,INSERT,DELETE,UPDATE";
const OWNER_PRIVILEGES: &str = "ALL";

pub struct DatabaseProvisioningCommandServiceImpl {
    administration: Arc<dyn PostgresDatabaseAdministrationRepository>,
    credential_generator: Arc<dyn CredentialGenerator>,
}

impl DatabaseProvisioningCommandServiceImpl {
    pub fn new(
        administration: Arc<dyn PostgresDatabaseAdministrationRepository>,
        credential_generator: Arc<dyn CredentialGenerator>,
    ) -> Self {
        Self {
            administration,
            credential_generator,
        }
    }

    async fn provision_schema(
        &self,
        database_name: &str,
        roles: &PostgresRoles,
        schema: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        self.administration
            .create_schema(database_name, &roles.owner, schema, span)
            .await?;

        let grants = [
            (roles.reader.as_str(), READER_PRIVILEGES, false),
            (roles.writer.as_str(), WRITER_PRIVILEGES, false),
            (roles.owner.as_str(), OWNER_PRIVILEGES, true),
        ];
        for (role, privileges, create_schema) in grants {
            self.administration
                .set_schema_privileges(
                    &PostgresSchemaPrivileges::new(
                        database_name,
                        roles.owner.as_str(),
                        role,
                        schema,
                        privileges,
                        create_schema,
                    ),
                    span,
                )
                .await?;
        }

        Ok(())
    }

    /// Moves `role` from `previous_group` into `group_role` and makes the
    /// group its default session role.
    async fn join_group(
        &self,
        role: &str,
        previous_group: &str,
        group_role: &str,
    ) -> Result<(), AdministrationDomainError> {
        if !previous_group.is_empty() && previous_group != group_role {
            self.administration.revoke_role(previous_group, role).await?;
        }
        self.administration.grant_role(group_role, role).await?;
        self.administration
            .alter_default_login_role(role, group_role)
            .await
    }

    /// Drops a login created by a failed apply. Its name was never recorded,
    /// so a retry would otherwise leave it behind.
    async fn discard_login(
        &self,
        role: &str,
        owner_role: &str,
        database_name: &str,
        span: &Span,
    ) {
        match self
            .administration
            .drop_role(role, owner_role, database_name, span)
            .await
        {
            Ok(()) => info!(parent: span, postgres_role = role, "discarded unrecorded login role"),
            Err(error) => {
                warn!(parent: span, postgres_role = role, %error, "failed to discard unrecorded login role")
            }
        }
    }
}

#[async_trait]
impl DatabaseProvisioningCommandService for DatabaseProvisioningCommandServiceImpl {
    async fn handle_apply_database(
        &self,
        command: ApplyPostgresDatabaseCommand,
    ) -> Result<PostgresStatus, ProvisionerDomainError> {
        let spec = command.spec();
        let roles = command.roles();
        let span = info_span!("apply_database", database = spec.database.as_str());

        self.administration.create_group_role(&roles.owner).await?;
        self.administration
            .create_database(&spec.database, &roles.owner)
            .await?;
        self.administration.create_group_role(&roles.reader).await?;
        self.administration.create_group_role(&roles.writer).await?;

        let mut status = PostgresStatus {
            succeeded: true,
            roles,
            schemas: command.status().schemas.clone(),
            extensions: command.status().extensions.clone(),
        };

        for extension in &spec.extensions {
            if status.extensions.contains(extension) {
                continue;
            }
            match self
                .administration
                .create_extension(&spec.database, extension, &span)
                .await
            {
                Ok(()) => status.extensions.push(extension.clone()),
                Err(error) => {
                    warn!(parent: &span, extension = extension.as_str(), error = %error, "could not create extension");
                }
            }
        }

        let roles = status.roles.clone();
        for schema in &spec.schemas {
            if status.schemas.contains(schema) {
                continue;
            }
            match self
                .provision_schema(&spec.database, &roles, schema, &span)
                .await
            {
                Ok(()) => status.schemas.push(schema.clone()),
                Err(error) => {
                    warn!(parent: &span, schema = schema.as_str(), error = %error, "could not provision schema");
                }
            }
        }

        info!(parent: &span, owner = status.roles.owner.as_str(), "database converged");
        Ok(status)
    }

    async fn handle_delete_database(
        &self,
        command: DeletePostgresDatabaseCommand,
    ) -> Result<(), ProvisionerDomainError> {
        let database_name = command.database_name();
        let span = info_span!("delete_database", database = database_name);

        if !command.drop_on_delete() {
            info!(parent: &span, "dropOnDelete is not set; leaving database in place");
            return Ok(());
        }

        let roles = command.roles();
        self.administration
            .drop_role(&roles.reader, &roles.owner, database_name, &span)
            .await?;
        self.administration
            .drop_role(&roles.writer, &roles.owner, database_name, &span)
            .await?;
        self.administration
            .drop_database(database_name, &span)
            .await?;

        if command.owns_master_role() {
            self.administration
                .drop_role(
                    &roles.owner,
                    self.administration.bootstrap_role(),
                    database_name,
                    &span,
                )
                .await?;
        }

        Ok(())
    }

    async fn handle_apply_user(
        &self,
        command: ApplyPostgresUserCommand,
    ) -> Result<ProvisionedUser, ProvisionerDomainError> {
        let spec = command.spec();
        let previous = command.status();
        let group_role = command.group_role().to_string();
        let span = info_span!("apply_user", database = spec.database.as_str(), role = spec.role.as_str());

        let generated = previous.postgres_role.is_empty();
        let role = if generated {
            format!("{}-{}", spec.role, self.credential_generator.role_suffix())
        } else {
            previous.postgres_role.clone()
        };

        let converged = if previous.succeeded && !generated {
            let exists = self.administration.role_exists(&role).await?;
            if !exists {
                warn!(
                    parent: &span,
                    postgres_role = role.as_str(),
                    "login role missing on server; recreating"
                );
            }
            exists
        } else {
            false
        };

        let mut credentials = None;
        let login = if converged {
            previous.postgres_login.clone()
        } else {
            let password = self.credential_generator.password();
            let login = self.administration.create_user_role(&role, &password).await?;
            credentials = Some(UserCredentials {
                role: role.clone(),
                login: login.clone(),
                password,
                database: spec.database.clone(),
            });
            login
        };

        if let Err(error) = self.join_group(&role, &previous.postgres_group, &group_role).await {
            if generated {
                self.discard_login(&role, &command.database_roles().owner, &spec.database, &span)
                    .await;
            }
            return Err(error.into());
        }

        info!(parent: &span, postgres_role = role.as_str(), group = group_role.as_str(), "user converged");
        Ok(ProvisionedUser {
            status: PostgresUserStatus {
                succeeded: true,
                postgres_role: role,
                postgres_login: login,
                postgres_group: group_role,
                database_name: spec.database.clone(),
            },
            credentials,
        })
    }

    async fn handle_delete_user(
        &self,
        command: DeletePostgresUserCommand,
    ) -> Result<(), ProvisionerDomainError> {
        let status = command.status();
        if status.postgres_role.is_empty() {
            return Ok(());
        }

        let span = info_span!("delete_user", role = status.postgres_role.as_str());
        self.administration
            .drop_role(
                &status.postgres_role,
                command.owner_role(),
                &status.database_name,
                &span,
            )
            .await?;

        Ok(())
    }
}
