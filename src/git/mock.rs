use crate::domain::TagRef;
use crate::error::{GitSemverError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations.
///
/// Commits form a single line of history; the last one added is HEAD.
#[derive(Debug, Default)]
pub struct MockRepository {
    commits: Vec<(String, i64)>,
    tags: Vec<TagRef>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit on top of HEAD
    pub fn add_commit(&mut self, hash: impl Into<String>, time: i64) {
        self.commits.push((hash.into(), time));
    }

    /// Add a tag pointing to a commit
    pub fn add_tag(&mut self, name: impl Into<String>, commit: impl Into<String>, timestamp: i64) {
        self.tags.push(TagRef::new(name, commit, timestamp));
    }
}

impl Repository for MockRepository {
    fn head_commit(&self) -> Result<String> {
        self.commits
            .last()
            .map(|(hash, _)| hash.clone())
            .ok_or(GitSemverError::NoHead)
    }

    fn history(&self) -> Result<Vec<String>> {
        if self.commits.is_empty() {
            return Err(GitSemverError::NoHead);
        }
        let mut commits = self.commits.clone();
        // Stable sort keeps later commits first among equal times
        commits.reverse();
        commits.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(commits.into_iter().map(|(hash, _)| hash).collect())
    }

    fn tags(&self) -> Result<Vec<TagRef>> {
        let known = |hash: &str| self.commits.iter().any(|(h, _)| h == hash);
        Ok(self
            .tags
            .iter()
            .filter(|tag| known(&tag.commit))
            .cloned()
            .collect())
    }
}
