pub trait CredentialGenerator: Send + Sync {
    /// Suffix appended to a user's role prefix to keep role names unique.
    fn role_suffix(&self) -> String;

    fn password(&self) -> String;
}
