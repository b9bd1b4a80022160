use serde::Serialize;

use crate::provisioner::domain::model::entities::{
    postgres_database::PostgresStatus, postgres_user::PostgresUserStatus,
};

#[derive(Clone, Debug, Default, Serialize)]
pub struct AppliedStateDocumentResource {
    pub databases: Vec<AppliedDatabaseResource>,
    pub users: Vec<AppliedUserResource>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AppliedDatabaseResource {
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostgresStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedUserResource {
    pub secret_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostgresUserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<UserCredentialsResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UserCredentialsResource {
    pub role: String,
    pub login: String,
    pub password: String,
    pub database: String,
}
