pub mod administration;
pub mod config;
pub mod provisioner;
