pub mod administration_domain_error;
pub mod cloud_provider;
pub mod postgres_error_code;
