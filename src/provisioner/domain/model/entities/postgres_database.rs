use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::provisioner::domain::model::value_objects::postgres_identifier::{
    validate_database_name, validate_extension_list, validate_identifier_list,
};

/// Desired state of one managed database.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostgresSpec {
    #[validate(custom(function = "validate_database_name"))]
    pub database: String,

    /// Existing role to own the database instead of `<database>-group`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_role: Option<String>,

    #[serde(default)]
    pub drop_on_delete: bool,

    #[serde(default)]
    #[validate(custom(function = "validate_identifier_list"))]
    pub schemas: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_extension_list"))]
    pub extensions: Vec<String>,
}

/// The three group roles backing one database.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct PostgresRoles {
    pub owner: String,
    pub reader: String,
    pub writer: String,
}

impl PostgresRoles {
    pub fn for_database(database: &str, master_role: Option<&str>) -> Self {
        Self {
            owner: master_role
                .map(str::to_string)
                .unwrap_or_else(|| format!("{database}-group")),
            reader: format!("{database}-reader"),
            writer: format!("{database}-writer"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_empty() && self.reader.is_empty() && self.writer.is_empty()
    }
}

/// Observed state of one managed database.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct PostgresStatus {
    pub succeeded: bool,
    #[serde(default)]
    pub roles: PostgresRoles,
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
}
