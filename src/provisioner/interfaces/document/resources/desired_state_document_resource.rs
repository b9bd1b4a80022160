use serde::{Deserialize, Serialize};

use crate::provisioner::domain::model::entities::{
    postgres_database::{PostgresSpec, PostgresStatus},
    postgres_user::{PostgresUserSpec, PostgresUserStatus},
};

/// Desired state handed over by the orchestrator, with the last observed
/// status of each resource when one exists.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DesiredStateDocumentResource {
    #[serde(default)]
    pub databases: Vec<DatabaseResource>,
    #[serde(default)]
    pub users: Vec<UserResource>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DatabaseResource {
    pub spec: PostgresSpec,
    #[serde(default)]
    pub status: PostgresStatus,
    /// Marks the resource as deleted; it is torn down instead of applied.
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserResource {
    pub spec: PostgresUserSpec,
    #[serde(default)]
    pub status: PostgresUserStatus,
    #[serde(default)]
    pub deleted: bool,
}
