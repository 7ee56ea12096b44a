use std::fmt::{Display, Formatter};
use std::str::FromStr;

use regex::Captures;
use tracing::trace;

use crate::numeric::convert_numeric;
use crate::{
    serde_via_str, BuildMetadata, Component, ComponentResult, GrammarPolicy, LoosePolicy,
    Policy, Prerelease, StrictPolicy, VersionError, VersionResult,
};

/// An immutable semantic version.
///
/// Parsing goes through a [`GrammarPolicy`]: the whole input must match the policy's pattern,
/// the policy then checks which components are required, and finally the numeric components,
/// prerelease and build metadata are extracted. Failures during extraction are reported as
/// [`VersionError::Component`], whose message is prefixed with
/// `Failed to parse version string: `.
///
/// The original input is retained and available through [`Version::source`]. Equality ignores
/// it so that `v1.2.3` parsed loosely equals `1.2.3`.
#[derive(Clone, Debug)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<Prerelease>,
    build: Option<BuildMetadata>,
    source: String,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
            source: format!("{major}.{minor}.{patch}"),
        }
    }

    pub fn with_prerelease(self, prerelease: Prerelease) -> Self {
        Self {
            prerelease: Some(prerelease),
            ..self
        }
        .with_source()
    }

    pub fn with_build(self, build: BuildMetadata) -> Self {
        Self {
            build: Some(build),
            ..self
        }
        .with_source()
    }

    // constructed versions have no original text so use their reconstruction
    fn with_source(self) -> Self {
        let source = self.to_string();
        Self { source, ..self }
    }

    /// Parses `text` using the strict policy.
    pub fn parse(text: &str) -> VersionResult<Self> {
        Self::parse_with::<StrictPolicy>(text)
    }

    pub fn parse_with_policy(text: &str, policy: Policy) -> VersionResult<Self> {
        match policy {
            Policy::Loose => Self::parse_with::<LoosePolicy>(text),
            Policy::Strict => Self::parse_with::<StrictPolicy>(text),
        }
    }

    pub fn parse_with<P: GrammarPolicy>(text: &str) -> VersionResult<Self> {
        let captures = P::pattern()
            .captures(text)
            .ok_or(VersionError::GrammarMismatch)?;
        trace!(input = text, policy = P::NAME, "matched version grammar");

        P::validate_schema(&captures)?;

        let version = Self::assemble(text, &captures).map_err(VersionError::Component)?;
        trace!(input = text, policy = P::NAME, version = %version, "assembled version");

        Ok(version)
    }

    fn assemble(text: &str, captures: &Captures<'_>) -> ComponentResult<Self> {
        let group = |component: Component| captures.name(component.as_ref());

        // an absent major only happens with a policy that skips the check, report it as empty
        let major = convert_numeric(
            group(Component::Major).map_or("", |m| m.as_str()),
            Component::Major,
        )?;
        let minor = match group(Component::Minor) {
            Some(m) => convert_numeric(m.as_str(), Component::Minor)?,
            None => 0,
        };
        let patch = match group(Component::Patch) {
            Some(m) => convert_numeric(m.as_str(), Component::Patch)?,
            None => 0,
        };

        let prerelease = captures
            .name("prerelease")
            .map(|m| Prerelease::parse(m.as_str()))
            .transpose()?;
        let build = captures
            .name("build")
            .map(|m| BuildMetadata::parse(m.as_str()))
            .transpose()?;

        Ok(Self {
            major,
            minor,
            patch,
            prerelease,
            build,
            source: text.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> Option<&Prerelease> {
        self.prerelease.as_ref()
    }

    pub fn build(&self) -> Option<&BuildMetadata> {
        self.build.as_ref()
    }

    /// The text this version was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
            && self.build == other.build
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Version::parse(text)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }

        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }

        Ok(())
    }
}

serde_via_str!(Version);
