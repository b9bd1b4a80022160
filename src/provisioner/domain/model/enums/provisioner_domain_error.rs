use thiserror::Error;

use crate::administration::domain::model::enums::administration_domain_error::AdministrationDomainError;

#[derive(Debug, Error)]
pub enum ProvisionerDomainError {
    #[error("database spec is invalid: {0}")]
    InvalidDatabaseSpec(String),

    #[error("user spec is invalid: {0}")]
    InvalidUserSpec(String),

    #[error("database {0} has not been provisioned")]
    DatabaseNotProvisioned(String),

    #[error(transparent)]
    Administration(#[from] AdministrationDomainError),
}
