use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Component, VersionError, VersionResult};

// Numeric components are `0` or have no leading zero. Prerelease identifiers are either numeric
// without a leading zero or contain at least one letter or hyphen.
const NUMBER: &str = "0|[1-9][0-9]*";
const PRERELEASE_IDENTIFIER: &str = "0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*";
const BUILD_IDENTIFIER: &str = "[0-9a-zA-Z-]+";

lazy_static! {
    static ref STRICT_RE: Regex = Regex::new(&version_pattern("")).unwrap();
    static ref LOOSE_RE: Regex = Regex::new(&version_pattern("v?")).unwrap();
}

/// Minor and patch are syntactically optional in both patterns so that the schema check, not
/// the match, decides which of them are required.
fn version_pattern(prefix: &str) -> String {
    format!(
        r"^{prefix}(?<major>{NUMBER})(?:\.(?<minor>{NUMBER})(?:\.(?<patch>{NUMBER}))?)?(?:-(?<prerelease>(?:{PRERELEASE_IDENTIFIER})(?:\.(?:{PRERELEASE_IDENTIFIER}))*))?(?:\+(?<build>{BUILD_IDENTIFIER}(?:\.{BUILD_IDENTIFIER})*))?$"
    )
}

/// Grammar and schema rules used to parse a [`crate::Version`].
///
/// The pattern must be anchored and expose the named groups `major`, `minor`, `patch`,
/// `prerelease` and `build`.
pub trait GrammarPolicy {
    const NAME: &'static str;

    fn pattern() -> &'static Regex;

    /// Fails with the first required group that did not match.
    fn validate_schema(captures: &Captures<'_>) -> VersionResult<()>;
}

fn require(captures: &Captures<'_>, component: Component) -> VersionResult<()> {
    if captures.name(component.as_ref()).is_none() {
        return Err(VersionError::MissingComponent(component));
    }

    Ok(())
}

/// `major.minor.patch` are all required.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrictPolicy;

impl GrammarPolicy for StrictPolicy {
    const NAME: &'static str = "strict";

    fn pattern() -> &'static Regex {
        &STRICT_RE
    }

    fn validate_schema(captures: &Captures<'_>) -> VersionResult<()> {
        require(captures, Component::Major)?;
        require(captures, Component::Minor)?;
        require(captures, Component::Patch)
    }
}

/// Only major is required; minor and patch default to 0 and a leading `v` is tolerated.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoosePolicy;

impl GrammarPolicy for LoosePolicy {
    const NAME: &'static str = "loose";

    fn pattern() -> &'static Regex {
        &LOOSE_RE
    }

    fn validate_schema(captures: &Captures<'_>) -> VersionResult<()> {
        require(captures, Component::Major)
    }
}

/// Runtime selection of a [`GrammarPolicy`], e.g. from configuration.
#[remain::sorted]
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, EnumString, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Policy {
    Loose,
    #[default]
    Strict,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::{GrammarPolicy, LoosePolicy, Policy, StrictPolicy};
    use crate::{Component, VersionError, VersionResult};

    fn strict_schema(input: &str) -> VersionResult<()> {
        let captures = StrictPolicy::pattern().captures(input).unwrap();
        StrictPolicy::validate_schema(&captures)
    }

    fn loose_schema(input: &str) -> VersionResult<()> {
        let captures = LoosePolicy::pattern().captures(input).unwrap();
        LoosePolicy::validate_schema(&captures)
    }

    #[test_case("1.2.3" => Ok(()))]
    #[test_case("1.2.3-rc.1+sha.5" => Ok(()); "with suffixes")]
    #[test_case("1.2" => Err(VersionError::MissingComponent(Component::Patch)); "missing patch")]
    #[test_case("1" => Err(VersionError::MissingComponent(Component::Minor)); "missing minor first")]
    #[test_case("1-rc" => Err(VersionError::MissingComponent(Component::Minor)); "missing minor with prerelease")]
    fn should_validate_strict_schema(input: &str) -> VersionResult<()> {
        strict_schema(input)
    }

    #[test_case("1")]
    #[test_case("v1.2")]
    #[test_case("v1.2.3-alpha+001")]
    fn should_validate_loose_schema(input: &str) {
        assert_eq!(Ok(()), loose_schema(input));
    }

    #[test_case("1.2.3-alpha.1+build.7", Some("1"), Some("2"), Some("3"), Some("alpha.1"), Some("build.7"); "all groups")]
    #[test_case("1.2", Some("1"), Some("2"), None, None, None; "no patch")]
    #[test_case("0.0.0+001", Some("0"), Some("0"), Some("0"), None, Some("001"); "build only")]
    fn should_capture_groups(
        input: &str,
        major: Option<&str>,
        minor: Option<&str>,
        patch: Option<&str>,
        prerelease: Option<&str>,
        build: Option<&str>,
    ) {
        let captures = StrictPolicy::pattern().captures(input).unwrap();
        let group = |name: &str| captures.name(name).map(|m| m.as_str());
        assert_eq!(major, group("major"));
        assert_eq!(minor, group("minor"));
        assert_eq!(patch, group("patch"));
        assert_eq!(prerelease, group("prerelease"));
        assert_eq!(build, group("build"));
    }

    #[test_case(""; "empty")]
    #[test_case("abc")]
    #[test_case("1.2.3.4"; "four components")]
    #[test_case("-1.2.3"; "negative")]
    #[test_case("01.2.3"; "leading zero major")]
    #[test_case("1.02.3"; "leading zero minor")]
    #[test_case("v1.2.3"; "prefix")]
    #[test_case(" 1.2.3"; "whitespace")]
    #[test_case("1.2.3-"; "empty prerelease")]
    #[test_case("1.2.3-a..b"; "empty prerelease identifier")]
    #[test_case("1.2.3-01"; "leading zero numeric prerelease")]
    #[test_case("1.2.3+"; "empty build")]
    #[test_case("1.2.3+a_b"; "illegal build character")]
    #[test_case("1.2.3\n"; "trailing newline")]
    fn should_not_match_strict(input: &str) {
        assert!(!StrictPolicy::pattern().is_match(input));
    }

    #[test_case("V1"; "uppercase prefix")]
    #[test_case("vv1"; "double prefix")]
    #[test_case("v"; "prefix only")]
    #[test_case("1..2"; "empty minor")]
    fn should_not_match_loose(input: &str) {
        assert!(!LoosePolicy::pattern().is_match(input));
    }

    #[test]
    fn should_default_to_strict() {
        assert_eq!(Policy::Strict, Policy::default());
    }

    #[test_case("strict" => Policy::Strict)]
    #[test_case("loose" => Policy::Loose)]
    fn should_parse_policy_name(input: &str) -> Policy {
        Policy::from_str(input).unwrap()
    }

    #[test]
    fn serde() {
        assert_eq!("\"loose\"", serde_json::to_string(&Policy::Loose).unwrap());
        assert_eq!(
            Policy::Strict,
            serde_json::from_str::<Policy>("\"strict\"").unwrap()
        );
        assert_eq!("strict", Policy::Strict.to_string());
    }
}
