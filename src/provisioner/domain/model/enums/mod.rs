pub mod provisioner_domain_error;
pub mod user_privilege;
