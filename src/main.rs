use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use dotenvy::dotenv;
use postgres_operator::{
    config::app_config::AppConfig,
    provisioner::{
        build_database_provisioning_command_service,
        interfaces::document::{
            desired_state_applier::apply_desired_state,
            resources::desired_state_document_resource::DesiredStateDocumentResource,
        },
    },
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        error!("usage: postgres-operator <desired-state.json>");
        return ExitCode::from(2);
    };

    let document = match read_document(&path).await {
        Ok(document) => document,
        Err(message) => {
            error!(path = %path.display(), error = message.as_str(), "could not read desired state");
            return ExitCode::from(2);
        }
    };

    let config = AppConfig::from_env();
    info!(cloud_provider = %config.cloud_provider, host = config.postgres_host.as_str(), "starting");

    let service = match build_database_provisioning_command_service(&config).await {
        Ok(service) => service,
        Err(e) => {
            error!(error = %e, "could not connect to postgres");
            return ExitCode::FAILURE;
        }
    };

    let applied = apply_desired_state(&service, document).await;
    let failed = applied.databases.iter().any(|resource| resource.error.is_some())
        || applied.users.iter().any(|resource| resource.error.is_some());

    match serde_json::to_string_pretty(&applied) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!(error = %e, "could not serialize applied state");
            return ExitCode::FAILURE;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn read_document(path: &Path) -> Result<DesiredStateDocumentResource, String> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}
