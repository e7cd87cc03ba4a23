//! # Markup Profiles
//!
//! A profile selects one of the built-in tag tables. `standard` follows
//! W3C SSML 1.1; `alexa` follows the Alexa Skills Kit dialect, which drops
//! `mark`, narrows several attributes to fixed value sets, and adds the
//! `amazon:*` extension tags and `w`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in tag table selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// W3C SSML 1.1.
    #[default]
    Standard,
    /// Alexa Skills Kit SSML.
    Alexa,
}

/// The string did not name a profile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown profile {0:?}: expected one of standard, alexa")]
pub struct UnknownProfile(pub String);

impl Profile {
    /// Returns all profiles in canonical order.
    pub fn all_profiles() -> &'static [Profile] {
        &[Self::Standard, Self::Alexa]
    }

    /// Returns the lowercase identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Alexa => "alexa",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "alexa" => Ok(Self::Alexa),
            other => Err(UnknownProfile(other.to_string())),
        }
    }
}
