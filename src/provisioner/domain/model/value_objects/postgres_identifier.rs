use regex::Regex;
use validator::ValidationError;

lazy_static::lazy_static! {
    /// Database names leave room for the `-reader` / `-writer` / `-group` suffixes.
    pub static ref DATABASE_NAME_REGEX: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_-]{0,55}$").expect("valid regex");
    pub static ref POSTGRES_IDENTIFIER_REGEX: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_$-]{0,62}$").expect("valid regex");
    pub static ref EXTENSION_NAME_REGEX: Regex = Regex::new("^[A-Za-z0-9_-]{1,63}$").expect("valid regex");
}

pub fn validate_database_name(value: &str) -> Result<(), ValidationError> {
    if DATABASE_NAME_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_database_name"))
    }
}

pub fn validate_identifier(value: &str) -> Result<(), ValidationError> {
    if POSTGRES_IDENTIFIER_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_identifier"))
    }
}

pub fn validate_identifier_list(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|value| POSTGRES_IDENTIFIER_REGEX.is_match(value)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_identifier"))
    }
}

pub fn validate_extension_list(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|value| EXTENSION_NAME_REGEX.is_match(value)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_extension_name"))
    }
}
