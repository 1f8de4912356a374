use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::version::Version;
use crate::error::{GitSemverError, Result};

/// Which version the head should be presented as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Development build of the next patch release
    #[default]
    Dev,
    Patch,
    Minor,
    Major,
}

pub const DEFAULT_TARGET: Target = Target::Dev;

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Dev => write!(f, "dev"),
            Target::Patch => write!(f, "patch"),
            Target::Minor => write!(f, "minor"),
            Target::Major => write!(f, "major"),
        }
    }
}

impl FromStr for Target {
    type Err = GitSemverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(Target::Dev),
            "patch" => Ok(Target::Patch),
            "minor" => Ok(Target::Minor),
            "major" => Ok(Target::Major),
            other => Err(GitSemverError::InvalidTarget(other.to_string())),
        }
    }
}

/// Compute the version that `target` leads to from `version`.
///
/// - **Dev**: a head past a plain release tag becomes a development build of
///   the next patch; anything else is returned unchanged
/// - **Patch**: patch += 1
/// - **Minor**: minor += 1, patch = 0
/// - **Major**: major += 1, minor = 0, patch = 0
///
/// Release targets also clear commits, pre-release and metadata. Parsed
/// components are always below `u64::MAX`, so an increment never overflows.
pub fn bump_to(version: &Version, target: Target) -> Version {
    let mut next = version.clone();
    match target {
        Target::Dev => {
            if version.is_development() && version.pre_release.is_empty() {
                next.patch = next.patch.saturating_add(1);
            }
            return next;
        }
        Target::Patch => {
            next.patch = next.patch.saturating_add(1);
        }
        Target::Minor => {
            next.minor = next.minor.saturating_add(1);
            next.patch = 0;
        }
        Target::Major => {
            next.major = next.major.saturating_add(1);
            next.minor = 0;
            next.patch = 0;
        }
    }
    next.commits = 0;
    next.pre_release.clear();
    next.meta.clear();
    next
}

impl Version {
    /// See [`bump_to`]
    pub fn bump(&self, target: Target) -> Version {
        bump_to(self, target)
    }
}
