use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::{is_identifier_char, serde_via_str, PrereleaseError, PrereleaseResult};

/// A single dot-separated segment of a prerelease tag.
///
/// Identifiers longer than one character may not start with `0`, even when they also contain
/// letters (`0a` is rejected). This is stricter than the SemVer grammar, which only forbids
/// leading zeros on purely numeric identifiers.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PrereleaseIdentifier(String);

impl PrereleaseIdentifier {
    pub fn parse(text: &str) -> PrereleaseResult<Self> {
        if text.is_empty() || !text.chars().all(is_identifier_char) {
            return Err(PrereleaseError::EmptyPart);
        }

        if text.len() > 1 && text.starts_with('0') {
            return Err(PrereleaseError::LeadingZero);
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_numeric(&self) -> bool {
        self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Display for PrereleaseIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered, non-empty list of prerelease identifiers.
///
/// A version without a prerelease holds `None` rather than an empty `Prerelease`.
/// Ordering compares identifiers lexically, left to right.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Prerelease {
    identifiers: Vec<PrereleaseIdentifier>,
    text: String,
}

impl Prerelease {
    /// Splits `text` on `.` and validates every piece, keeping empty pieces so that
    /// `a..b` or a trailing dot fail validation.
    pub fn parse(text: &str) -> PrereleaseResult<Self> {
        let identifiers = text
            .split('.')
            .map(PrereleaseIdentifier::parse)
            .collect::<PrereleaseResult<Vec<_>>>()?;

        Ok(Self {
            identifiers,
            text: text.to_string(),
        })
    }

    pub fn identifiers(&self) -> &[PrereleaseIdentifier] {
        &self.identifiers
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Prerelease {
    type Err = PrereleaseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Prerelease::parse(text)
    }
}

impl Display for Prerelease {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

serde_via_str!(Prerelease);
