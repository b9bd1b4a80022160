use std::sync::Arc;

use async_trait::async_trait;
use tracing::{Instrument, Span, debug, info, warn};

use crate::administration::{
    domain::{
        model::{
            entities::postgres_schema_privileges::PostgresSchemaPrivileges,
            enums::{
                administration_domain_error::AdministrationDomainError,
                postgres_error_code::PostgresErrorCode,
            },
            value_objects::table_privileges::TablePrivileges,
        },
        services::postgres_error_classifier::{ignore_classified, is_classified},
    },
    infrastructure::{
        connection::postgres_server_connection::{PostgresDatabaseSession, PostgresServerConnection},
        persistence::repositories::{
            postgres::administration_statements as statements,
            postgres_database_administration_repository::PostgresDatabaseAdministrationRepository,
        },
    },
};

/// Plain PostgreSQL behaviour, where the administrative login is a superuser.
pub struct DefaultPostgresDatabaseAdministrationRepositoryImpl {
    connection: Arc<dyn PostgresServerConnection>,
}

impl DefaultPostgresDatabaseAdministrationRepositoryImpl {
    pub fn new(connection: Arc<dyn PostgresServerConnection>) -> Self {
        Self { connection }
    }

    /// Current owner of `database_name`, or `None` when it does not exist.
    pub async fn database_owner(
        &self,
        database_name: &str,
    ) -> Result<Option<String>, AdministrationDomainError> {
        self.connection
            .fetch_optional_text(&statements::database_owner(database_name))
            .await
    }

    async fn execute(
        &self,
        statement: &str,
        benign: &[PostgresErrorCode],
    ) -> Result<(), AdministrationDomainError> {
        ignore_classified(self.connection.execute(statement).await, benign)
    }

    async fn execute_on_database(
        &self,
        database_name: &str,
        statements: &[String],
        benign: &[PostgresErrorCode],
    ) -> Result<(), AdministrationDomainError> {
        let mut session = self.connection.open_session(database_name).await?;

        let mut outcome = Ok(());
        for statement in statements {
            outcome = ignore_classified(session.execute(statement).await, benign);
            if outcome.is_err() {
                break;
            }
        }

        session.close().await;
        outcome
    }

    async fn release_owned_objects(
        session: &mut dyn PostgresDatabaseSession,
        role: &str,
        new_owner: &str,
    ) -> Result<(), AdministrationDomainError> {
        match session.execute(&statements::reassign_owned(role, new_owner)).await {
            Ok(()) => {}
            // Either role is gone or new_owner is; in the latter case DROP
            // OWNED would delete the objects, so leave them for DROP ROLE to
            // report.
            Err(error) if is_classified(&error, &[PostgresErrorCode::UndefinedObject]) => {
                debug!(role, new_owner, "nothing reassigned");
                return Ok(());
            }
            Err(error) => return Err(error),
        }

        // Owned objects now belong to new_owner, so this only removes grants.
        ignore_classified(
            session.execute(&statements::drop_owned(role)).await,
            &[PostgresErrorCode::UndefinedObject],
        )
    }
}

#[async_trait]
impl PostgresDatabaseAdministrationRepository for DefaultPostgresDatabaseAdministrationRepositoryImpl {
    async fn create_database(
        &self,
        database_name: &str,
        owner_role: &str,
    ) -> Result<(), AdministrationDomainError> {
        self.execute(
            &statements::create_database(database_name),
            &[PostgresErrorCode::DuplicateDatabase],
        )
        .await?;

        self.execute(&statements::alter_database_owner(database_name, owner_role), &[])
            .await?;

        self.execute(
            &statements::grant_create_on_database(database_name, owner_role),
            &[],
        )
        .await
    }

    async fn create_schema(
        &self,
        database_name: &str,
        owner_role: &str,
        schema: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        async {
            self.execute_on_database(
                database_name,
                &[statements::create_schema(schema, owner_role)],
                &[PostgresErrorCode::DuplicateSchema],
            )
            .await?;
            info!(database = database_name, schema, owner = owner_role, "schema present");
            Ok(())
        }
        .instrument(span.clone())
        .await
    }

    async fn create_extension(
        &self,
        database_name: &str,
        extension: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        async {
            self.execute_on_database(
                database_name,
                &[statements::create_extension(extension)],
                &[PostgresErrorCode::DuplicateObject],
            )
            .await?;
            info!(database = database_name, extension, "extension present");
            Ok(())
        }
        .instrument(span.clone())
        .await
    }

    async fn create_group_role(&self, role: &str) -> Result<(), AdministrationDomainError> {
        self.execute(
            &statements::create_group_role(role),
            &[PostgresErrorCode::DuplicateObject],
        )
        .await
    }

    async fn create_user_role(
        &self,
        role: &str,
        password: &str,
    ) -> Result<String, AdministrationDomainError> {
        match self
            .connection
            .execute(&statements::create_user_role(role, password))
            .await
        {
            Ok(()) => Ok(role.to_string()),
            Err(error) if is_classified(&error, &[PostgresErrorCode::DuplicateObject]) => {
                debug!(role, "login role already exists; rotating its password");
                self.update_password(role, password).await?;
                Ok(role.to_string())
            }
            Err(error) => Err(error),
        }
    }

    async fn update_password(
        &self,
        role: &str,
        password: &str,
    ) -> Result<(), AdministrationDomainError> {
        self.execute(&statements::update_password(role, password), &[])
            .await
    }

    async fn grant_role(&self, role: &str, grantee: &str) -> Result<(), AdministrationDomainError> {
        self.execute(&statements::grant_role(role, grantee), &[]).await
    }

    async fn set_schema_privileges(
        &self,
        privileges: &PostgresSchemaPrivileges,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        async {
            let table_privileges = TablePrivileges::parse(&privileges.privileges)?;

            let mut grants = vec![
                statements::grant_usage_on_schema(&privileges.schema, &privileges.role),
                statements::grant_on_all_tables(
                    &table_privileges,
                    &privileges.schema,
                    &privileges.role,
                ),
                statements::alter_default_privileges(
                    &privileges.creator,
                    &privileges.schema,
                    &table_privileges,
                    &privileges.role,
                ),
            ];
            if privileges.create_schema {
                grants.push(statements::grant_create_on_schema(
                    &privileges.schema,
                    &privileges.role,
                ));
            }

            self.execute_on_database(&privileges.database, &grants, &[])
                .await?;
            info!(
                database = privileges.database.as_str(),
                schema = privileges.schema.as_str(),
                role = privileges.role.as_str(),
                privileges = privileges.privileges.as_str(),
                create_schema = privileges.create_schema,
                "schema privileges granted"
            );
            Ok(())
        }
        .instrument(span.clone())
        .await
    }

    async fn revoke_role(&self, role: &str, revoked: &str) -> Result<(), AdministrationDomainError> {
        self.execute(
            &statements::revoke_role(role, revoked),
            &[PostgresErrorCode::UndefinedObject],
        )
        .await
    }

    async fn alter_default_login_role(
        &self,
        role: &str,
        set_role: &str,
    ) -> Result<(), AdministrationDomainError> {
        self.execute(&statements::alter_default_login_role(role, set_role), &[])
            .await
    }

    async fn drop_database(
        &self,
        database_name: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        async {
            let missing = [PostgresErrorCode::InvalidCatalogName];

            self.execute(&statements::revoke_connect(database_name), &missing)
                .await?;
            self.execute(&statements::terminate_backends(database_name), &missing)
                .await?;
            self.execute(&statements::drop_database(database_name), &missing)
                .await?;

            info!(database = database_name, "dropped database");
            Ok(())
        }
        .instrument(span.clone())
        .await
    }

    async fn drop_role(
        &self,
        role: &str,
        new_owner: &str,
        database_name: &str,
        span: &Span,
    ) -> Result<(), AdministrationDomainError> {
        async {
            // REASSIGN OWNED only sees objects of the connected database.
            match self.connection.open_session(database_name).await {
                Ok(mut session) => {
                    let released =
                        Self::release_owned_objects(session.as_mut(), role, new_owner).await;
                    session.close().await;
                    released?;
                }
                Err(error) if is_classified(&error, &[PostgresErrorCode::InvalidCatalogName]) => {
                    info!(
                        role,
                        database = database_name,
                        "database no longer exists; skipping ownership reassignment"
                    );
                }
                Err(error) => return Err(error),
            }

            match self
                .execute(&statements::drop_role(role), &[PostgresErrorCode::UndefinedObject])
                .await
            {
                Ok(()) => {}
                Err(error)
                    if is_classified(&error, &[PostgresErrorCode::DependentObjectsStillExist]) =>
                {
                    warn!(
                        role,
                        new_owner,
                        database = database_name,
                        "role still owns objects outside the reassigned database"
                    );
                    return Err(error);
                }
                Err(error) => return Err(error),
            }

            info!(role, new_owner, "dropped role");
            Ok(())
        }
        .instrument(span.clone())
        .await
    }

    async fn role_exists(&self, role: &str) -> Result<bool, AdministrationDomainError> {
        let found = self
            .connection
            .fetch_optional_text(&statements::role_name(role))
            .await?;
        Ok(found.is_some())
    }

    fn user(&self) -> &str {
        self.connection.user()
    }

    fn default_database(&self) -> &str {
        self.connection.default_database()
    }
}
