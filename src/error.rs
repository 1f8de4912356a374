use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Component;

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("failed to open repo: repository does not exist: {}", .0.display())]
    RepoNotFound(PathBuf),

    #[error("repository has no commits")]
    NoHead,

    #[error("git version tag must contain 3 components: X.Y.Z: got '{0}'")]
    InvalidVersionCore(String),

    #[error("failed to parse {component} version: '{input}'")]
    InvalidNumeric { component: Component, input: String },

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("invalid tag pattern: {0}")]
    InvalidPattern(String),

    #[error("invalid bump target: '{0}' (expected dev, patch, minor or major)")]
    InvalidTarget(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }

    /// Create an invalid-numeric error for one version component
    pub fn invalid_numeric(component: Component, input: impl Into<String>) -> Self {
        GitSemverError::InvalidNumeric {
            component,
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_not_found_display() {
        let err = GitSemverError::RepoNotFound(PathBuf::from("/sdf"));
        assert_eq!(
            err.to_string(),
            "failed to open repo: repository does not exist: /sdf"
        );
    }

    #[test]
    fn test_invalid_format_display() {
        let err = GitSemverError::InvalidFormat("q".to_string());
        assert_eq!(err.to_string(), "invalid format: q");
    }

    #[test]
    fn test_invalid_numeric_names_component() {
        let err = GitSemverError::invalid_numeric(Component::Minor, "a");
        assert_eq!(err.to_string(), "failed to parse minor version: 'a'");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GitSemverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (GitSemverError::config("x"), "Configuration error"),
            (GitSemverError::NoHead, "repository has no commits"),
            (
                GitSemverError::InvalidVersionCore("1.2".into()),
                "git version tag must contain 3 components",
            ),
            (GitSemverError::InvalidTarget("foo".into()), "invalid bump target"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
