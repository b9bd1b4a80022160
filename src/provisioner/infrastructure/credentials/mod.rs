pub mod random_credential_generator;
