/// Privileges a role receives on one schema of one database.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostgresSchemaPrivileges {
    pub database: String,
    /// Role whose future tables the default privileges apply to.
    pub creator: String,
    pub role: String,
    pub schema: String,
    pub privileges: String,
    pub create_schema: bool,
}

impl PostgresSchemaPrivileges {
    pub fn new(
        database: impl Into<String>,
        creator: impl Into<String>,
        role: impl Into<String>,
        schema: impl Into<String>,
        privileges: impl Into<String>,
        create_schema: bool,
    ) -> Self {
        Self {
            database: database.into(),
            creator: creator.into(),
            role: role.into(),
            schema: schema.into(),
            privileges: privileges.into(),
            create_schema,
        }
    }
}
