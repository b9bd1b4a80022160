use async_trait::async_trait;

use crate::provisioner::domain::model::{
    commands::{
        apply_postgres_database_command::ApplyPostgresDatabaseCommand,
        apply_postgres_user_command::ApplyPostgresUserCommand,
        delete_postgres_database_command::DeletePostgresDatabaseCommand,
        delete_postgres_user_command::DeletePostgresUserCommand,
    },
    entities::{postgres_database::PostgresStatus, postgres_user::ProvisionedUser},
    enums::provisioner_domain_error::ProvisionerDomainError,
};

#[async_trait]
pub trait DatabaseProvisioningCommandService: Send + Sync {
    async fn handle_apply_database(
        &self,
        command: ApplyPostgresDatabaseCommand,
    ) -> Result<PostgresStatus, ProvisionerDomainError>;

    async fn handle_delete_database(
        &self,
        command: DeletePostgresDatabaseCommand,
    ) -> Result<(), ProvisionerDomainError>;

    async fn handle_apply_user(
        &self,
        command: ApplyPostgresUserCommand,
    ) -> Result<ProvisionedUser, ProvisionerDomainError>;

    async fn handle_delete_user(
        &self,
        command: DeletePostgresUserCommand,
    ) -> Result<(), ProvisionerDomainError>;
}
