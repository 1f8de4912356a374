use super::version::{Component, Version};
use crate::error::{GitSemverError, Result};

/// Prefix recognized on tag names when none is configured
pub const DEFAULT_PREFIX: &str = "v";

/// Number of hash characters used as build metadata past a tag
const META_HASH_LEN: usize = 8;

/// Facts about the repository head, produced by the repository inspector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoHead {
    /// Name of the nearest eligible tag, empty if history has none
    pub last_tag: String,
    pub commits_since_tag: u64,
    /// Full hash of the head commit
    pub commit_hash: String,
}

impl RepoHead {
    pub fn new(
        last_tag: impl Into<String>,
        commits_since_tag: u64,
        commit_hash: impl Into<String>,
    ) -> Self {
        RepoHead {
            last_tag: last_tag.into(),
            commits_since_tag,
            commit_hash: commit_hash.into(),
        }
    }

    /// Head of a commit that carries `tag` itself
    pub fn tagged(tag: impl Into<String>) -> Self {
        RepoHead::new(tag, 0, String::new())
    }
}

/// Prefix actually recognized on tags; empty falls back to [`DEFAULT_PREFIX`]
pub fn effective_prefix(recognized_prefix: &str) -> &str {
    if recognized_prefix.is_empty() {
        DEFAULT_PREFIX
    } else {
        recognized_prefix
    }
}

/// Build a [`Version`] from a repository head.
///
/// `recognized_prefix` (or [`DEFAULT_PREFIX`] when empty) is stripped from the
/// tag and kept as the version prefix.
/// An explicit `+meta` suffix on the tag wins over the abbreviated commit hash,
/// which is only used when the head is past the tag. An empty tag yields
/// `0.0.0`.
///
/// # Example
/// ```
/// use git_semver::domain::{parse_from_head, RepoHead, Version};
///
/// let head = RepoHead::new("v1.2.3", 4, "fcf2c8fa1b2c");
/// let v = parse_from_head(&head, "v").unwrap();
/// assert_eq!(v, Version::new(1, 2, 3).with_prefix("v").with_commits(4).with_meta("fcf2c8fa"));
/// ```
pub fn parse_from_head(head: &RepoHead, recognized_prefix: &str) -> Result<Version> {
    let mut version = Version {
        commits: head.commits_since_tag,
        ..Version::default()
    };

    let prefix = effective_prefix(recognized_prefix);
    let mut rest = head.last_tag.as_str();
    if let Some(stripped) = rest.strip_prefix(prefix) {
        version.prefix = prefix.to_string();
        rest = stripped;
    }

    if let Some((core, meta)) = rest.split_once('+') {
        version.meta = meta.to_string();
        rest = core;
    } else if head.commits_since_tag > 0 {
        version.meta = head.commit_hash.chars().take(META_HASH_LEN).collect();
    }

    if let Some((core, pre_release)) = rest.split_once('-') {
        version.pre_release = pre_release.to_string();
        rest = core;
    }

    if rest.is_empty() {
        return Ok(version);
    }

    let parts: Vec<&str> = rest.split('.').collect();
    if parts.len() != 3 {
        return Err(GitSemverError::InvalidVersionCore(rest.to_string()));
    }

    version.major = parse_component(parts[0], Component::Major)?;
    version.minor = parse_component(parts[1], Component::Minor)?;
    version.patch = parse_component(parts[2], Component::Patch)?;

    Ok(version)
}

/// Parse a bare tag name as a released version
pub fn parse_tag(tag: &str, recognized_prefix: &str) -> Result<Version> {
    parse_from_head(&RepoHead::tagged(tag), recognized_prefix)
}

fn parse_component(part: &str, component: Component) -> Result<u64> {
    // u64's FromStr accepts a leading '+'
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GitSemverError::invalid_numeric(component, part));
    }
    // u64::MAX is reserved so every component can still be bumped
    match part.parse::<u64>() {
        Ok(value) if value < u64::MAX => Ok(value),
        _ => Err(GitSemverError::invalid_numeric(component, part)),
    }
}
