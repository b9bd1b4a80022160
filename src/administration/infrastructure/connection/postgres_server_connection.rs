use async_trait::async_trait;

use crate::administration::domain::model::enums::administration_domain_error::AdministrationDomainError;

/// The administrative connection held by one capability instance.
#[async_trait]
pub trait PostgresServerConnection: Send + Sync {
    fn user(&self) -> &str;

    fn default_database(&self) -> &str;

    /// Runs a statement on the default database.
    async fn execute(&self, statement: &str) -> Result<(), AdministrationDomainError>;

    /// Runs a query on the default database and returns the first text column
    /// of the first row, if any.
    async fn fetch_optional_text(
        &self,
        statement: &str,
    ) -> Result<Option<String>, AdministrationDomainError>;

    /// Connects to another database on the same server with the same identity.
    async fn open_session(
        &self,
        database_name: &str,
    ) -> Result<Box<dyn PostgresDatabaseSession>, AdministrationDomainError>;
}

/// Short-lived connection to a named database.
#[async_trait]
pub trait PostgresDatabaseSession: Send {
    async fn execute(&mut self, statement: &str) -> Result<(), AdministrationDomainError>;

    async fn close(self: Box<Self>);
}
