use crate::provisioner::domain::model::entities::postgres_user::PostgresUserStatus;

#[derive(Clone, Debug)]
pub struct DeletePostgresUserCommand {
    status: PostgresUserStatus,
    owner_role: String,
}

impl DeletePostgresUserCommand {
    /// `owner_role` receives whatever the login role owns.
    pub fn new(status: PostgresUserStatus, owner_role: impl Into<String>) -> Self {
        Self {
            status,
            owner_role: owner_role.into(),
        }
    }

    pub fn status(&self) -> &PostgresUserStatus {
        &self.status
    }

    pub fn owner_role(&self) -> &str {
        &self.owner_role
    }
}
