use std::fmt;

/// Non-fatal conditions met while deriving a version.
/// These are reported to the user but never change the exit code.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No eligible tag anywhere in the history of HEAD
    NoTags { commits: u64 },
    /// A shorthand format was replaced to keep the pre-release visible
    GuardApplied {
        requested: String,
        used: String,
        pre_release: String,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTags { commits } => {
                write!(
                    f,
                    "No matching tags found in {} commit(s); versioning from 0.0.0",
                    commits
                )
            }
            BoundaryWarning::GuardApplied {
                requested,
                used,
                pre_release,
            } => {
                write!(
                    f,
                    "Pre-release '{}' present: using format '{}' instead of '{}'",
                    pre_release, used, requested
                )
            }
        }
    }
}
