use strum::{AsRefStr, Display};
use thiserror::Error;

/// The numeric components of a version, in the order they are checked.
#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Component {
    Major,
    Minor,
    Patch,
}

#[remain::sorted]
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NumericError {
    #[error("cannot parse number from empty string")]
    Empty,

    #[error("invalid digit `{0}` found in number")]
    InvalidDigit(char),

    #[error("number too large to fit in 64 bits")]
    Overflow,
}

#[remain::sorted]
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PrereleaseError {
    /// Empty identifier or one containing characters outside `[A-Za-z0-9-]`.
    #[error("empty prerelease part")]
    EmptyPart,

    #[error("leading zero in prerelease part")]
    LeadingZero,
}

pub type PrereleaseResult<T> = Result<T, PrereleaseError>;

#[remain::sorted]
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BuildMetadataError {
    /// Empty segment or one containing characters outside `[A-Za-z0-9-]`.
    #[error("empty build metadata")]
    Empty,
}

pub type BuildMetadataResult<T> = Result<T, BuildMetadataError>;

/// Failures raised while extracting components from a version that already matched the grammar.
#[remain::sorted]
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ComponentError {
    #[error(transparent)]
    BuildMetadata(#[from] BuildMetadataError),

    #[error("invalid {field} version: {source}")]
    Numeric {
        field: Component,
        source: NumericError,
    },

    #[error(transparent)]
    Prerelease(#[from] PrereleaseError),
}

pub type ComponentResult<T> = Result<T, ComponentError>;

#[remain::sorted]
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum VersionError {
    #[error("Failed to parse version string: {0}")]
    Component(#[from] ComponentError),

    #[error("invalid version string")]
    GrammarMismatch,

    #[error("{0} version is required")]
    MissingComponent(Component),
}

pub type VersionResult<T> = Result<T, VersionError>;
