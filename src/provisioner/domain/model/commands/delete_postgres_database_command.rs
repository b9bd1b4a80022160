use validator::Validate;

use crate::provisioner::domain::model::{
    entities::postgres_database::{PostgresRoles, PostgresSpec, PostgresStatus},
    enums::provisioner_domain_error::ProvisionerDomainError,
};

#[derive(Clone, Debug)]
pub struct DeletePostgresDatabaseCommand {
    spec: PostgresSpec,
    roles: PostgresRoles,
}

impl DeletePostgresDatabaseCommand {
    pub fn new(spec: PostgresSpec, status: PostgresStatus) -> Result<Self, ProvisionerDomainError> {
        spec.validate()
            .map_err(|e| ProvisionerDomainError::InvalidDatabaseSpec(e.to_string()))?;

        let roles = if status.roles.is_empty() {
            PostgresRoles::for_database(&spec.database, spec.master_role.as_deref())
        } else {
            status.roles
        };

        Ok(Self { spec, roles })
    }

    pub fn database_name(&self) -> &str {
        &self.spec.database
    }

    pub fn drop_on_delete(&self) -> bool {
        self.spec.drop_on_delete
    }

    /// The owner role is only dropped when it was generated for this database.
    pub fn owns_master_role(&self) -> bool {
        self.spec.master_role.is_none()
    }

    pub fn roles(&self) -> &PostgresRoles {
        &self.roles
    }
}
