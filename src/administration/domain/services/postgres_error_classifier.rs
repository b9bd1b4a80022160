use crate::administration::domain::model::enums::{
    administration_domain_error::AdministrationDomainError, postgres_error_code::PostgresErrorCode,
};

/// Returns true only for server errors whose SQLSTATE is exactly one of `codes`.
pub fn is_classified(error: &AdministrationDomainError, codes: &[PostgresErrorCode]) -> bool {
    match error.code().and_then(|code| code.parse::<PostgresErrorCode>().ok()) {
        Some(code) => codes.contains(&code),
        None => false,
    }
}

/// Turns a classified failure into success and passes everything else through.
pub fn ignore_classified(
    result: Result<(), AdministrationDomainError>,
    codes: &[PostgresErrorCode],
) -> Result<(), AdministrationDomainError> {
    match result {
        Err(error) if is_classified(&error, codes) => Ok(()),
        other => other,
    }
}
