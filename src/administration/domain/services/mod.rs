pub mod postgres_error_classifier;
