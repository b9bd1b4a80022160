use std::fmt;

/// Managed PostgreSQL flavour the administrative layer adapts to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
    #[default]
    Default,
}

impl CloudProvider {
    /// Resolves the declared cloud type. Matching is exact; an empty or
    /// unknown value selects the plain PostgreSQL behaviour.
    pub fn from_cloud_type(value: &str) -> Self {
        match value {
            "AWS" => Self::Aws,
            "Azure" => Self::Azure,
            "GCP" => Self::Gcp,
            _ => Self::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::Gcp => "GCP",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
