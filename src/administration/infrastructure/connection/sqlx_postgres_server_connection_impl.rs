use async_trait::async_trait;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use tracing::{debug, warn};

use crate::administration::{
    domain::model::enums::administration_domain_error::AdministrationDomainError,
    infrastructure::connection::{
        connection_settings::ConnectionSettings,
        postgres_connection_provider::{open_admin_pool, open_database_connection, ping},
        postgres_server_connection::{PostgresDatabaseSession, PostgresServerConnection},
    },
};

pub struct SqlxPostgresServerConnectionImpl {
    pool: PgPool,
    settings: ConnectionSettings,
}

impl SqlxPostgresServerConnectionImpl {
    pub async fn connect(settings: ConnectionSettings) -> Result<Self, AdministrationDomainError> {
        let pool = open_admin_pool(&settings).await?;

        if let Err(error) = ping(&pool).await {
            pool.close().await;
            return Err(error);
        }

        Ok(Self { pool, settings })
    }
}

#[async_trait]
impl PostgresServerConnection for SqlxPostgresServerConnectionImpl {
    fn user(&self) -> &str {
        &self.settings.user
    }

    fn default_database(&self) -> &str {
        &self.settings.default_database
    }

    async fn execute(&self, statement: &str) -> Result<(), AdministrationDomainError> {
        sqlx::raw_sql(statement).execute(&self.pool).await?;
        Ok(())
    }

    async fn fetch_optional_text(
        &self,
        statement: &str,
    ) -> Result<Option<String>, AdministrationDomainError> {
        let row: Option<(String,)> = sqlx::query_as(statement)
            .persistent(false)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    async fn open_session(
        &self,
        database_name: &str,
    ) -> Result<Box<dyn PostgresDatabaseSession>, AdministrationDomainError> {
        debug!(database = database_name, "opening database session");
        let connection = open_database_connection(&self.settings, database_name).await?;
        Ok(Box::new(SqlxPostgresDatabaseSessionImpl { connection }))
    }
}

struct SqlxPostgresDatabaseSessionImpl {
    connection: PgConnection,
}

#[async_trait]
impl PostgresDatabaseSession for SqlxPostgresDatabaseSessionImpl {
    async fn execute(&mut self, statement: &str) -> Result<(), AdministrationDomainError> {
        // Executor is called on the connection directly; the method form is
        // not general enough for a Send future.
        Executor::execute(&mut self.connection, sqlx::raw_sql(statement)).await?;
        Ok(())
    }

    async fn close(self: Box<Self>) {
        if let Err(error) = self.connection.close().await {
            warn!(error = %error, "failed to close database session cleanly");
        }
    }
}
