use std::sync::Arc;

use crate::{
    administration::{
        build_postgres_administration,
        domain::model::enums::administration_domain_error::AdministrationDomainError,
    },
    config::app_config::AppConfig,
    provisioner::{
        application::command_services::database_provisioning_command_service_impl::DatabaseProvisioningCommandServiceImpl,
        infrastructure::credentials::random_credential_generator::RandomCredentialGenerator,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_database_provisioning_command_service(
    config: &AppConfig,
) -> Result<DatabaseProvisioningCommandServiceImpl, AdministrationDomainError> {
    let administration = build_postgres_administration(config).await?;

    Ok(DatabaseProvisioningCommandServiceImpl::new(
        administration,
        Arc::new(RandomCredentialGenerator),
    ))
}
