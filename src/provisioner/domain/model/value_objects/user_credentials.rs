/// Credentials of a freshly created login role. Storing them is up to the
/// caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserCredentials {
    pub role: String,
    pub login: String,
    pub password: String,
    pub database: String,
}
