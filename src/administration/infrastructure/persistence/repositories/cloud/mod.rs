pub mod aws_postgres_database_administration_repository_impl;
pub mod azure_postgres_database_administration_repository_impl;
pub mod bootstrap_membership;
pub mod gcp_postgres_database_administration_repository_impl;
