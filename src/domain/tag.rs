use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;

use super::parser::effective_prefix;
use crate::error::{GitSemverError, Result};

/// A tag competing to identify a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    /// Tagger time of an annotated tag, or the commit time of a lightweight
    /// one, in seconds since the Unix epoch
    pub timestamp: i64,
}

impl Tag {
    pub fn new(name: impl Into<String>, timestamp: i64) -> Self {
        Tag {
            name: name.into(),
            timestamp,
        }
    }
}

/// A tag as listed by a repository, together with the commit it peels to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    /// Full hash of the tagged commit
    pub commit: String,
    pub timestamp: i64,
}

impl TagRef {
    pub fn new(name: impl Into<String>, commit: impl Into<String>, timestamp: i64) -> Self {
        TagRef {
            name: name.into(),
            commit: commit.into(),
            timestamp,
        }
    }

    pub fn to_tag(&self) -> Tag {
        Tag::new(self.name.clone(), self.timestamp)
    }
}

/// Decides which tag names are eligible for version resolution.
///
/// Ineligible tags are ignored entirely. With both a glob and the semver
/// filter set, a name must satisfy both.
#[derive(Debug, Clone, Default)]
pub struct TagMatcher {
    glob: Option<GlobMatcher>,
    semver_prefix: Option<String>,
}

impl TagMatcher {
    /// Accept every tag
    pub fn any() -> Self {
        TagMatcher::default()
    }

    /// Only accept names matching a shell-style glob (`*`, `?`, `[...]`).
    ///
    /// Wildcards never match `/`, and a backslash escapes the next character.
    pub fn with_glob(mut self, pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|e| {
                debug!(pattern, error = %e, "rejected tag glob");
                GitSemverError::InvalidPattern(pattern.to_string())
            })?;
        self.glob = Some(glob.compile_matcher());
        Ok(self)
    }

    /// Only accept names that are valid semantic versions once
    /// `recognized_prefix` is stripped
    pub fn semver_only(mut self, recognized_prefix: &str) -> Self {
        self.semver_prefix = Some(effective_prefix(recognized_prefix).to_string());
        self
    }

    pub fn matches(&self, name: &str) -> bool {
        if let Some(glob) = &self.glob {
            if !glob.is_match(name) {
                return false;
            }
        }
        match &self.semver_prefix {
            Some(prefix) => {
                let bare = name.strip_prefix(prefix.as_str()).unwrap_or(name);
                semver::Version::parse(bare).is_ok()
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_ref_to_tag() {
        let tag_ref = TagRef::new("v1.0.0", "abc123", 42);
        assert_eq!(tag_ref.to_tag(), Tag::new("v1.0.0", 42));
    }

    #[test]
    fn test_any_accepts_everything() {
        let matcher = TagMatcher::any();
        assert!(matcher.matches("v1.2.3"));
        assert!(matcher.matches("nightly"));
    }

    #[test]
    fn test_glob_star() {
        let matcher = TagMatcher::any().with_glob("v*").unwrap();
        assert!(matcher.matches("v1.2.3"));
        assert!(matcher.matches("v"));
        assert!(!matcher.matches("1.2.3"));
        assert!(!matcher.matches("v1/2"));
    }

    #[test]
    fn test_glob_is_anchored_and_literal() {
        let matcher = TagMatcher::any().with_glob("1.2.*").unwrap();
        assert!(matcher.matches("1.2.7"));
        assert!(!matcher.matches("1x2.7"));
        assert!(!matcher.matches("v1.2.7"));
    }

    #[test]
    fn test_glob_question_and_class() {
        let matcher = TagMatcher::any().with_glob("release-?.[0-9]").unwrap();
        assert!(matcher.matches("release-1.5"));
        assert!(!matcher.matches("release-10.5"));
        assert!(!matcher.matches("release-1.x"));

        let negated = TagMatcher::any().with_glob("[!v]*").unwrap();
        assert!(negated.matches("1.0.0"));
        assert!(!negated.matches("v1.0.0"));
    }

    #[test]
    fn test_glob_bracket_and_escape_literals() {
        let bracket = TagMatcher::any().with_glob("[]]1.0.0").unwrap();
        assert!(bracket.matches("]1.0.0"));
        assert!(!bracket.matches("\\]1.0.0"));

        let star = TagMatcher::any().with_glob(r"v\*").unwrap();
        assert!(star.matches("v*"));
        assert!(!star.matches("v1.0.0"));
    }

    #[test]
    fn test_glob_unterminated_class() {
        assert!(matches!(
            TagMatcher::any().with_glob("v[0-9"),
            Err(GitSemverError::InvalidPattern(ref p)) if p == "v[0-9"
        ));
    }

    #[test]
    fn test_semver_only() {
        let matcher = TagMatcher::any().semver_only("v");
        assert!(matcher.matches("v1.2.3"));
        assert!(matcher.matches("1.2.3-rc.1+build.5"));
        assert!(!matcher.matches("v1.2"));
        assert!(!matcher.matches("latest"));
    }

    #[test]
    fn test_semver_only_with_empty_prefix_strips_default() {
        let matcher = TagMatcher::any().semver_only("");
        assert!(matcher.matches("v1.2.3"));
        assert!(matcher.matches("1.2.3"));
    }

    #[test]
    fn test_glob_and_semver_combined() {
        let matcher = TagMatcher::any()
            .with_glob("v*")
            .unwrap()
            .semver_only("v");
        assert!(matcher.matches("v2.0.0"));
        assert!(!matcher.matches("2.0.0"));
        assert!(!matcher.matches("vnext"));
    }
}
