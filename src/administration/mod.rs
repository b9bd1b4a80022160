use std::sync::Arc;

use tracing::info;

use crate::{
    administration::{
        domain::model::enums::{
            administration_domain_error::AdministrationDomainError, cloud_provider::CloudProvider,
        },
        infrastructure::{
            connection::{
                connection_settings::ConnectionSettings,
                postgres_server_connection::PostgresServerConnection,
                sqlx_postgres_server_connection_impl::SqlxPostgresServerConnectionImpl,
            },
            persistence::repositories::{
                cloud::{
                    aws_postgres_database_administration_repository_impl::AwsPostgresDatabaseAdministrationRepositoryImpl,
                    azure_postgres_database_administration_repository_impl::AzurePostgresDatabaseAdministrationRepositoryImpl,
                    gcp_postgres_database_administration_repository_impl::GcpPostgresDatabaseAdministrationRepositoryImpl,
                },
                postgres::default_postgres_database_administration_repository_impl::DefaultPostgresDatabaseAdministrationRepositoryImpl,
                postgres_database_administration_repository::PostgresDatabaseAdministrationRepository,
            },
        },
    },
    config::app_config::AppConfig,
};

pub mod domain;
pub mod infrastructure;

pub async fn build_postgres_administration(
    config: &AppConfig,
) -> Result<Arc<dyn PostgresDatabaseAdministrationRepository>, AdministrationDomainError> {
    let settings = ConnectionSettings::from_config(config)?;
    connect_postgres_administration(settings, config.cloud_provider).await
}

/// Connects to the server once and wraps the connection in the variant for
/// `cloud_provider`. Connection failures are returned, never retried.
pub async fn connect_postgres_administration(
    settings: ConnectionSettings,
    cloud_provider: CloudProvider,
) -> Result<Arc<dyn PostgresDatabaseAdministrationRepository>, AdministrationDomainError> {
    let host = settings.host.clone();
    let port = settings.port;
    let connection = SqlxPostgresServerConnectionImpl::connect(settings).await?;
    info!(host = host.as_str(), port, "connected to postgres server");

    Ok(select_postgres_administration(
        Arc::new(connection),
        cloud_provider,
    ))
}

pub fn select_postgres_administration(
    connection: Arc<dyn PostgresServerConnection>,
    cloud_provider: CloudProvider,
) -> Arc<dyn PostgresDatabaseAdministrationRepository> {
    let base = DefaultPostgresDatabaseAdministrationRepositoryImpl::new(connection);

    info!(cloud_provider = %cloud_provider, "selected postgres administration variant");
    match cloud_provider {
        CloudProvider::Aws => Arc::new(AwsPostgresDatabaseAdministrationRepositoryImpl::new(base)),
        CloudProvider::Azure => {
            Arc::new(AzurePostgresDatabaseAdministrationRepositoryImpl::new(base))
        }
        CloudProvider::Gcp => Arc::new(GcpPostgresDatabaseAdministrationRepositoryImpl::new(base)),
        CloudProvider::Default => Arc::new(base),
    }
}
