use tracing::{Span, info};

use crate::administration::{
    domain::{
        model::enums::{
            administration_domain_error::AdministrationDomainError,
            postgres_error_code::PostgresErrorCode,
        },
        services::postgres_error_classifier::is_classified,
    },
    infrastructure::persistence::repositories::{
        postgres::default_postgres_database_administration_repository_impl::DefaultPostgresDatabaseAdministrationRepositoryImpl,
        postgres_database_administration_repository::PostgresDatabaseAdministrationRepository,
    },
};

/// Outcome of granting a role to the provider's bootstrap role.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BootstrapGrant {
    Granted,
    AlreadyHeld,
    RoleMissing,
}

/// Makes `bootstrap_role` a member of `role` so it may manage it. Membership
/// loops (0LP01) count as already held.
pub async fn grant_to_bootstrap(
    base: &DefaultPostgresDatabaseAdministrationRepositoryImpl,
    role: &str,
    bootstrap_role: &str,
) -> Result<BootstrapGrant, AdministrationDomainError> {
    if role == bootstrap_role {
        return Ok(BootstrapGrant::AlreadyHeld);
    }

    match base.grant_role(role, bootstrap_role).await {
        Ok(()) => Ok(BootstrapGrant::Granted),
        Err(error) if is_classified(&error, &[PostgresErrorCode::InvalidGrantOperation]) => {
            Ok(BootstrapGrant::AlreadyHeld)
        }
        Err(error) if is_classified(&error, &[PostgresErrorCode::UndefinedObject]) => {
            Ok(BootstrapGrant::RoleMissing)
        }
        Err(error) => Err(error),
    }
}

/// Drops `role` on providers where the bootstrap role is not a superuser and
/// must belong to both `role` and `new_owner` before REASSIGN OWNED works.
/// Membership in `new_owner` is kept: it is a managed group role.
pub async fn drop_role_as_member(
    base: &DefaultPostgresDatabaseAdministrationRepositoryImpl,
    bootstrap_role: &str,
    role: &str,
    new_owner: &str,
    database_name: &str,
    span: &Span,
) -> Result<(), AdministrationDomainError> {
    if grant_to_bootstrap(base, role, bootstrap_role).await? == BootstrapGrant::RoleMissing {
        info!(parent: span, role, bootstrap_role, "role does not exist; nothing to drop");
        return Ok(());
    }

    if grant_to_bootstrap(base, new_owner, bootstrap_role).await? == BootstrapGrant::RoleMissing {
        info!(parent: span, role, new_owner, "new owner does not exist; ownership stays put");
    }

    base.drop_role(role, new_owner, database_name, span).await
}
