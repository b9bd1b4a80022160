use std::time::Duration;

use sqlx::{
    Connection, PgConnection, PgPool,
    postgres::PgPoolOptions,
};

use crate::administration::{
    domain::model::enums::administration_domain_error::AdministrationDomainError,
    infrastructure::connection::connection_settings::ConnectionSettings,
};

/// Opens the administrative pool on the default database. A failure here
/// means the capability cannot be built at all.
pub async fn open_admin_pool(settings: &ConnectionSettings) -> Result<PgPool, AdministrationDomainError> {
    let mut pool_options = PgPoolOptions::new().max_connections(1);
    if let Some(timeout) = settings.arguments.connect_timeout {
        pool_options = pool_options.acquire_timeout(timeout);
    }

    pool_options
        .connect_with(settings.connect_options(&settings.default_database))
        .await
        .map_err(|e| AdministrationDomainError::ConnectionFailed(e.to_string()))
}

pub async fn ping(pool: &PgPool) -> Result<(), AdministrationDomainError> {
    let mut connection = pool
        .acquire()
        .await
        .map_err(|e| AdministrationDomainError::PingFailed(e.to_string()))?;

    connection
        .ping()
        .await
        .map_err(|e| AdministrationDomainError::PingFailed(e.to_string()))
}

/// Opens a single connection to `database_name`. Server errors keep their
/// SQLSTATE so a missing database (3D000) can be classified by the caller.
/// Bounded by `connect_timeout` when one is configured.
pub async fn open_database_connection(
    settings: &ConnectionSettings,
    database_name: &str,
) -> Result<PgConnection, AdministrationDomainError> {
    let options = settings.connect_options(database_name);
    let connection = within_connect_timeout(
        settings.arguments.connect_timeout,
        database_name,
        PgConnection::connect_with(&options),
    )
    .await??;
    Ok(connection)
}

async fn within_connect_timeout<F, T>(
    timeout: Option<Duration>,
    database_name: &str,
    connect: F,
) -> Result<T, AdministrationDomainError>
where
    F: Future<Output = T>,
{
    match timeout {
        Some(timeout) => tokio::time::timeout(timeout, connect).await.map_err(|_| {
            AdministrationDomainError::ConnectionFailed(format!(
                "timed out after {timeout:?} connecting to database {database_name}"
            ))
        }),
        None => Ok(connect.await),
    }
}
