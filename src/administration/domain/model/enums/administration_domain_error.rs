use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum AdministrationDomainError {
    #[error("postgres error {code}: {message}")]
    DatabaseError { code: String, message: String },

    #[error("failed to connect to postgres server: {0}")]
    ConnectionFailed(String),

    #[error("postgres server did not answer the liveness check: {0}")]
    PingFailed(String),

    #[error("unsupported connection argument: {0}")]
    InvalidConnectionArgument(String),

    #[error("privilege list is invalid: {0}")]
    InvalidPrivileges(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

impl AdministrationDomainError {
    pub fn database(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DatabaseError {
            code: code.into(),
            message: message.into(),
        }
    }

    /// SQLSTATE reported by the server, if this is a server-side failure.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::DatabaseError { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AdministrationDomainError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) => Self::database(code.into_owned(), db_err.message()),
                None => Self::InfrastructureError(db_err.message().to_string()),
            },
            other => Self::InfrastructureError(other.to_string()),
        }
    }
}
