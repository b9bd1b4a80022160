use validator::Validate;

use crate::provisioner::domain::model::{
    entities::{
        postgres_database::PostgresRoles,
        postgres_user::{PostgresUserSpec, PostgresUserStatus},
    },
    enums::{provisioner_domain_error::ProvisionerDomainError, user_privilege::UserPrivilege},
};

#[derive(Clone, Debug)]
pub struct ApplyPostgresUserCommand {
    spec: PostgresUserSpec,
    status: PostgresUserStatus,
    database_roles: PostgresRoles,
}

impl ApplyPostgresUserCommand {
    pub fn new(
        spec: PostgresUserSpec,
        status: PostgresUserStatus,
        database_roles: PostgresRoles,
    ) -> Result<Self, ProvisionerDomainError> {
        spec.validate()
            .map_err(|e| ProvisionerDomainError::InvalidUserSpec(e.to_string()))?;

        if database_roles.is_empty() {
            return Err(ProvisionerDomainError::DatabaseNotProvisioned(spec.database));
        }

        Ok(Self {
            spec,
            status,
            database_roles,
        })
    }

    pub fn spec(&self) -> &PostgresUserSpec {
        &self.spec
    }

    pub fn status(&self) -> &PostgresUserStatus {
        &self.status
    }

    pub fn database_roles(&self) -> &PostgresRoles {
        &self.database_roles
    }

    pub fn group_role(&self) -> &str {
        UserPrivilege::from_privileges(&self.spec.privileges).group_role(&self.database_roles)
    }
}
