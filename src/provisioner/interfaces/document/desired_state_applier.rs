use std::collections::HashMap;

use tracing::warn;

use crate::provisioner::{
    domain::{
        model::{
            commands::{
                apply_postgres_database_command::ApplyPostgresDatabaseCommand,
                apply_postgres_user_command::ApplyPostgresUserCommand,
                delete_postgres_database_command::DeletePostgresDatabaseCommand,
                delete_postgres_user_command::DeletePostgresUserCommand,
            },
            entities::postgres_database::PostgresRoles,
            enums::provisioner_domain_error::ProvisionerDomainError,
        },
        services::database_provisioning_command_service::DatabaseProvisioningCommandService,
    },
    interfaces::document::resources::{
        applied_state_document_resource::{
            AppliedDatabaseResource, AppliedStateDocumentResource, AppliedUserResource,
            UserCredentialsResource,
        },
        desired_state_document_resource::{DatabaseResource, DesiredStateDocumentResource, UserResource},
    },
};

/// Converges every resource of `document` once. Databases are applied before
/// the users that join their roles; deletions run users first. A failing
/// resource is reported in the result and does not stop the others.
pub async fn apply_desired_state(
    service: &dyn DatabaseProvisioningCommandService,
    document: DesiredStateDocumentResource,
) -> AppliedStateDocumentResource {
    let (deleted_databases, databases): (Vec<DatabaseResource>, Vec<DatabaseResource>) =
        document.databases.into_iter().partition(|resource| resource.deleted);
    let (deleted_users, users): (Vec<UserResource>, Vec<UserResource>) =
        document.users.into_iter().partition(|resource| resource.deleted);

    let mut known_roles: HashMap<String, PostgresRoles> = deleted_databases
        .iter()
        .map(|resource| (resource.spec.database.clone(), database_roles(resource)))
        .collect();
    let mut applied = AppliedStateDocumentResource::default();

    for resource in databases {
        let database = resource.spec.database.clone();
        let result = match ApplyPostgresDatabaseCommand::new(resource.spec, resource.status) {
            Ok(command) => service.handle_apply_database(command).await,
            Err(error) => Err(error),
        };

        match result {
            Ok(status) => {
                known_roles.insert(database.clone(), status.roles.clone());
                applied.databases.push(AppliedDatabaseResource {
                    database,
                    status: Some(status),
                    error: None,
                });
            }
            Err(error) => applied.databases.push(failed_database(database, error)),
        }
    }

    for resource in users {
        let secret_name = resource.spec.secret_name.clone();
        let roles = known_roles
            .get(&resource.spec.database)
            .cloned()
            .unwrap_or_default();
        let result = match ApplyPostgresUserCommand::new(resource.spec, resource.status, roles) {
            Ok(command) => service.handle_apply_user(command).await,
            Err(error) => Err(error),
        };

        applied.users.push(match result {
            Ok(provisioned) => AppliedUserResource {
                secret_name,
                status: Some(provisioned.status),
                credentials: provisioned.credentials.map(|credentials| UserCredentialsResource {
                    role: credentials.role,
                    login: credentials.login,
                    password: credentials.password,
                    database: credentials.database,
                }),
                error: None,
            },
            Err(error) => failed_user(secret_name, error),
        });
    }

    for resource in deleted_users {
        let secret_name = resource.spec.secret_name.clone();
        let owner_role = known_roles
            .get(&resource.status.database_name)
            .map(|roles| roles.owner.clone())
            .unwrap_or_else(|| {
                PostgresRoles::for_database(&resource.status.database_name, None).owner
            });

        let command = DeletePostgresUserCommand::new(resource.status, owner_role);
        if let Err(error) = service.handle_delete_user(command).await {
            applied.users.push(failed_user(secret_name, error));
        }
    }

    for resource in deleted_databases {
        let database = resource.spec.database.clone();
        let result = match DeletePostgresDatabaseCommand::new(resource.spec, resource.status) {
            Ok(command) => service.handle_delete_database(command).await,
            Err(error) => Err(error),
        };
        if let Err(error) = result {
            applied.databases.push(failed_database(database, error));
        }
    }

    applied
}

fn database_roles(resource: &DatabaseResource) -> PostgresRoles {
    if resource.status.roles.is_empty() {
        PostgresRoles::for_database(&resource.spec.database, resource.spec.master_role.as_deref())
    } else {
        resource.status.roles.clone()
    }
}

fn failed_database(database: String, error: ProvisionerDomainError) -> AppliedDatabaseResource {
    warn!(database = database.as_str(), error = %error, "database not converged");
    AppliedDatabaseResource {
        database,
        status: None,
        error: Some(error.to_string()),
    }
}

fn failed_user(secret_name: String, error: ProvisionerDomainError) -> AppliedUserResource {
    warn!(secret_name = secret_name.as_str(), error = %error, "user not converged");
    AppliedUserResource {
        secret_name,
        status: None,
        credentials: None,
        error: Some(error.to_string()),
    }
}
