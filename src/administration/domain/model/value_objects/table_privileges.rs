use crate::administration::domain::model::enums::administration_domain_error::AdministrationDomainError;

const ALLOWED_PRIVILEGES: [&str; 9] = [
    "SELECT",
    "INSERT",
    "UPDATE",
    "DELETE",
    "TRUNCATE",
    "REFERENCES",
    "TRIGGER",
    "ALL",
    "ALL PRIVILEGES",
];

/// Comma separated table privilege list, normalised to upper case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TablePrivileges(Vec<String>);

impl TablePrivileges {
    pub fn parse(value: &str) -> Result<Self, AdministrationDomainError> {
        let mut privileges = Vec::new();

        for raw in value.split(',') {
            let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
            if !ALLOWED_PRIVILEGES.contains(&normalized.as_str()) {
                return Err(AdministrationDomainError::InvalidPrivileges(value.to_string()));
            }
            if !privileges.contains(&normalized) {
                privileges.push(normalized);
            }
        }

        Ok(Self(privileges))
    }

    pub fn to_sql(&self) -> String {
        self.0.join(", ")
    }
}
