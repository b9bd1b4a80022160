use crate::provisioner::domain::model::entities::postgres_database::PostgresRoles;

/// Group a login role joins. Anything other than OWNER or WRITE reads only.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UserPrivilege {
    Owner,
    Write,
    Read,
}

impl UserPrivilege {
    pub fn from_privileges(value: &str) -> Self {
        match value {
            "OWNER" => Self::Owner,
            "WRITE" => Self::Write,
            _ => Self::Read,
        }
    }

    pub fn group_role<'a>(&self, roles: &'a PostgresRoles) -> &'a str {
        match self {
            Self::Owner => &roles.owner,
            Self::Write => &roles.writer,
            Self::Read => &roles.reader,
        }
    }
}
