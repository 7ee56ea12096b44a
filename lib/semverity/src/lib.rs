mod build;
mod errors;
mod numeric;
mod policy;
mod prerelease;
mod semantic;

pub use build::BuildMetadata;
pub use errors::{
    BuildMetadataError, BuildMetadataResult, Component, ComponentError, ComponentResult,
    NumericError, PrereleaseError, PrereleaseResult, VersionError, VersionResult,
};
pub use policy::{GrammarPolicy, LoosePolicy, Policy, StrictPolicy};
pub use prerelease::{Prerelease, PrereleaseIdentifier};
pub use semantic::Version;

/// Characters allowed in both prerelease identifiers and build metadata segments.
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Serializes a type as its `Display` text and deserializes it through `FromStr`.
macro_rules! serde_via_str {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse::<$ty>().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use serde_via_str;
