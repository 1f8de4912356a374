use std::path::Path;

use tracing::{debug, info};

use crate::domain::{RepoHead, TagResolver};
use crate::error::Result;
use crate::git::{Git2Repository, Repository};

/// Produces the [RepoHead] of a repository
pub struct HeadAnalyzer {
    resolver: TagResolver,
}

impl HeadAnalyzer {
    /// Create a new head analyzer
    pub fn new(resolver: TagResolver) -> Self {
        HeadAnalyzer { resolver }
    }

    /// Find the nearest eligible tag behind HEAD and the commits since it
    pub fn analyze<R: Repository>(&self, repo: &R) -> Result<RepoHead> {
        let head = repo.head_commit()?;
        let tags = repo.tags()?;
        debug!(head = %head, tags = tags.len(), "collected repository tags");

        let tag_map = self.resolver.tag_map(tags);
        debug!(tagged_commits = tag_map.len(), "built tag map");

        let history = if tag_map.contains_key(&head) {
            Vec::new()
        } else {
            repo.history()?
        };
        let described = self.resolver.resolve(&head, history, &tag_map);

        info!(
            tag = %described.last_tag,
            commits_since_tag = described.commits_since_tag,
            "resolved repository head"
        );
        Ok(described)
    }
}

/// Open the repository containing `path` and describe its head
pub fn inspect<P: AsRef<Path>>(path: P, resolver: TagResolver) -> Result<RepoHead> {
    let repo = Git2Repository::open(path)?;
    HeadAnalyzer::new(resolver).analyze(&repo)
}
