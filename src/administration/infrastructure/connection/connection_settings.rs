use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::{
    administration::domain::model::enums::administration_domain_error::AdministrationDomainError,
    config::app_config::AppConfig,
};

/// Options carried by the `key=value&key=value` connection argument string.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConnectionArguments {
    pub ssl_mode: Option<String>,
    pub ssl_root_cert: Option<String>,
    pub application_name: Option<String>,
    pub connect_timeout: Option<Duration>,
    pub statement_timeout: Option<String>,
}

impl ConnectionArguments {
    pub fn parse(raw: &str) -> Result<Self, AdministrationDomainError> {
        let mut arguments = Self::default();

        for pair in raw.trim_start_matches('?').split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| AdministrationDomainError::InvalidConnectionArgument(pair.to_string()))?;

            match key {
                "sslmode" => {
                    value.parse::<PgSslMode>().map_err(|_| {
                        AdministrationDomainError::InvalidConnectionArgument(pair.to_string())
                    })?;
                    arguments.ssl_mode = Some(value.to_string());
                }
                "sslrootcert" => arguments.ssl_root_cert = Some(value.to_string()),
                "application_name" => arguments.application_name = Some(value.to_string()),
                "connect_timeout" => {
                    let seconds: u64 = value.parse().map_err(|_| {
                        AdministrationDomainError::InvalidConnectionArgument(pair.to_string())
                    })?;
                    arguments.connect_timeout = Some(Duration::from_secs(seconds));
                }
                "statement_timeout" => arguments.statement_timeout = Some(value.to_string()),
                _ => {
                    return Err(AdministrationDomainError::InvalidConnectionArgument(
                        pair.to_string(),
                    ));
                }
            }
        }

        Ok(arguments)
    }
}

/// Identity and address of the administrative connection.
#[derive(Clone, Debug)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub default_database: String,
    pub arguments: ConnectionArguments,
}

impl ConnectionSettings {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        port: u16,
        uri_args: &str,
        default_database: impl Into<String>,
    ) -> Result<Self, AdministrationDomainError> {
        Ok(Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            default_database: default_database.into(),
            arguments: ConnectionArguments::parse(uri_args)?,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AdministrationDomainError> {
        Self::new(
            config.postgres_host.clone(),
            config.postgres_user.clone(),
            config.postgres_password.clone(),
            config.postgres_port,
            &config.postgres_uri_args,
            config.postgres_default_database.clone(),
        )
    }

    pub fn connect_options(&self, database_name: &str) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(database_name);

        if let Some(ssl_mode) = self
            .arguments
            .ssl_mode
            .as_deref()
            .and_then(|value| value.parse::<PgSslMode>().ok())
        {
            options = options.ssl_mode(ssl_mode);
        }
        if let Some(root_cert) = &self.arguments.ssl_root_cert {
            options = options.ssl_root_cert(root_cert.as_str());
        }
        if let Some(application_name) = &self.arguments.application_name {
            options = options.application_name(application_name);
        }
        if let Some(statement_timeout) = &self.arguments.statement_timeout {
            options = options.options([("statement_timeout", statement_timeout.as_str())]);
        }

        options
    }
}
