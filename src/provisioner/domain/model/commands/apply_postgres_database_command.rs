use validator::Validate;

use crate::provisioner::domain::model::{
    entities::postgres_database::{PostgresRoles, PostgresSpec, PostgresStatus},
    enums::provisioner_domain_error::ProvisionerDomainError,
    value_objects::postgres_identifier::validate_identifier,
};

#[derive(Clone, Debug)]
pub struct ApplyPostgresDatabaseCommand {
    spec: PostgresSpec,
    status: PostgresStatus,
}

impl ApplyPostgresDatabaseCommand {
    pub fn new(spec: PostgresSpec, status: PostgresStatus) -> Result<Self, ProvisionerDomainError> {
        spec.validate()
            .map_err(|e| ProvisionerDomainError::InvalidDatabaseSpec(e.to_string()))?;
        if let Some(master_role) = &spec.master_role {
            validate_identifier(master_role)
                .map_err(|e| ProvisionerDomainError::InvalidDatabaseSpec(e.to_string()))?;
        }

        Ok(Self { spec, status })
    }

    pub fn spec(&self) -> &PostgresSpec {
        &self.spec
    }

    pub fn status(&self) -> &PostgresStatus {
        &self.status
    }

    pub fn roles(&self) -> PostgresRoles {
        PostgresRoles::for_database(&self.spec.database, self.spec.master_role.as_deref())
    }
}
