use std::str::FromStr;

/// SQLSTATE codes the administrative operations treat as "already satisfied".
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PostgresErrorCode {
    DuplicateObject,
    DuplicateDatabase,
    DuplicateSchema,
    UndefinedObject,
    InvalidCatalogName,
    InvalidGrantOperation,
    DependentObjectsStillExist,
}

impl PostgresErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DuplicateObject => "42710",
            Self::DuplicateDatabase => "42P04",
            Self::DuplicateSchema => "42P06",
            Self::UndefinedObject => "42704",
            Self::InvalidCatalogName => "3D000",
            Self::InvalidGrantOperation => "0LP01",
            Self::DependentObjectsStillExist => "2BP01",
        }
    }
}

impl FromStr for PostgresErrorCode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "42710" => Ok(Self::DuplicateObject),
            "42P04" => Ok(Self::DuplicateDatabase),
            "42P06" => Ok(Self::DuplicateSchema),
            "42704" => Ok(Self::UndefinedObject),
            "3D000" => Ok(Self::InvalidCatalogName),
            "0LP01" => Ok(Self::InvalidGrantOperation),
            "2BP01" => Ok(Self::DependentObjectsStillExist),
            _ => Err(()),
        }
    }
}
