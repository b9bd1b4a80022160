use crate::administration::domain::model::enums::cloud_provider::CloudProvider;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_default_database: String,
    pub postgres_uri_args: String,
    pub cloud_provider: CloudProvider,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Missing or unparsable
    /// values fall back to the local development defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            postgres_host: lookup("POSTGRES_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            postgres_port: lookup("POSTGRES_PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(5432),
            postgres_user: lookup("POSTGRES_USER").unwrap_or_else(|| "postgres".to_string()),
            postgres_password: lookup("POSTGRES_PASSWORD").unwrap_or_default(),
            postgres_default_database: lookup("POSTGRES_DEFAULT_DATABASE")
                .unwrap_or_else(|| "postgres".to_string()),
            postgres_uri_args: lookup("POSTGRES_URI_ARGS").unwrap_or_default(),
            cloud_provider: CloudProvider::from_cloud_type(
                &lookup("POSTGRES_CLOUD_PROVIDER").unwrap_or_default(),
            ),
        }
    }
}
