use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::provisioner::domain::model::value_objects::{
    postgres_identifier::{validate_database_name, validate_identifier},
    user_credentials::UserCredentials,
};

/// Desired state of one application login.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostgresUserSpec {
    /// Prefix of the generated role name.
    #[validate(length(min = 1, max = 57), custom(function = "validate_identifier"))]
    pub role: String,

    #[validate(custom(function = "validate_database_name"))]
    pub database: String,

    #[validate(length(min = 1))]
    pub secret_name: String,

    #[serde(default)]
    pub privileges: String,
}

/// Observed state of one application login.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostgresUserStatus {
    pub succeeded: bool,
    pub postgres_role: String,
    pub postgres_login: String,
    pub postgres_group: String,
    pub database_name: String,
}

/// Result of converging a user: its status, plus credentials when a password
/// was (re)issued.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProvisionedUser {
    pub status: PostgresUserStatus,
    pub credentials: Option<UserCredentials>,
}
