use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::{is_identifier_char, serde_via_str, BuildMetadataError, BuildMetadataResult};

/// Build metadata following a `+`. Purely informational so it carries no ordering.
///
/// Every dot-separated segment must be non-empty and within `[A-Za-z0-9-]`. Unlike
/// prerelease identifiers, leading zeros are allowed.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BuildMetadata(String);

impl BuildMetadata {
    pub fn parse(text: &str) -> BuildMetadataResult<Self> {
        let valid = text
            .split('.')
            .all(|segment| !segment.is_empty() && segment.chars().all(is_identifier_char));

        if !valid {
            return Err(BuildMetadataError::Empty);
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl FromStr for BuildMetadata {
    type Err = BuildMetadataError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        BuildMetadata::parse(text)
    }
}

impl Display for BuildMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

serde_via_str!(BuildMetadata);
