pub mod credential_generator;
pub mod database_provisioning_command_service;
