//! Git operations abstraction layer
//!
//! The version engine only needs three facts from a repository: the head
//! commit, the commits reachable from it, and the tags with their targets.
//! The [Repository] trait captures those, so the engine can run against:
//!
//! - [repository::Git2Repository]: a real repository opened with the `git2` crate
//! - [mock::MockRepository]: an in-memory repository for testing
//!
//! ```rust
//! # use git_semver::git::{MockRepository, Repository};
//! let mut repo = MockRepository::new();
//! repo.add_commit("c1", 100);
//! repo.add_tag("v1.0.0", "c1", 100);
//! assert_eq!(repo.head_commit().unwrap(), "c1");
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::TagRef;
use crate::error::Result;

/// Read-only view of a repository used to describe its head.
///
/// ## Error Handling
///
/// A repository without commits reports [crate::error::GitSemverError::NoHead]
/// from [Repository::head_commit] and [Repository::history]. Tags that cannot be
/// resolved to a commit are left out of [Repository::tags] rather than
/// reported as errors.
pub trait Repository {
    /// Full hash of the commit HEAD points at
    fn head_commit(&self) -> Result<String>;

    /// Hashes of all commits reachable from HEAD, HEAD first, ordered by
    /// committer time (newest first)
    fn history(&self) -> Result<Vec<String>>;

    /// Every tag that resolves to a commit.
    ///
    /// The timestamp is the tagger time for annotated tags and the commit
    /// time of the target for lightweight tags.
    fn tags(&self) -> Result<Vec<TagRef>>;
}
