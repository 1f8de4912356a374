use std::path::Path;

use git2::{ErrorCode, Repository as Git2Repo, Sort};
use tracing::debug;

use crate::domain::TagRef;
use crate::error::{GitSemverError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository containing `path`, searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "repository discovery failed");
            GitSemverError::RepoNotFound(path.to_path_buf())
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

fn head_error(e: git2::Error) -> GitSemverError {
    match e.code() {
        ErrorCode::UnbornBranch | ErrorCode::NotFound => GitSemverError::NoHead,
        _ => GitSemverError::Git(e),
    }
}

impl super::Repository for Git2Repository {
    fn head_commit(&self) -> Result<String> {
        let commit = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(head_error)?;
        Ok(commit.id().to_string())
    }

    fn history(&self) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head().map_err(head_error)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            commits.push(oid?.to_string());
        }
        Ok(commits)
    }

    fn tags(&self) -> Result<Vec<TagRef>> {
        let mut tags = Vec::new();

        for reference in self.repo.references_glob("refs/tags/*")? {
            let reference = match reference {
                Ok(reference) => reference,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable tag reference");
                    continue;
                }
            };
            let Some(name) = reference.shorthand().map(str::to_string) else {
                continue;
            };
            let commit = match reference.peel_to_commit() {
                Ok(commit) => commit,
                Err(e) => {
                    debug!(tag = %name, error = %e, "skipping tag without a commit target");
                    continue;
                }
            };

            let commit_time = commit.time().seconds();
            let timestamp = match reference.peel_to_tag() {
                Ok(annotated) => annotated
                    .tagger()
                    .map(|tagger| tagger.when().seconds())
                    .unwrap_or(commit_time),
                Err(_) => commit_time,
            };

            tags.push(TagRef::new(name, commit.id().to_string(), timestamp));
        }

        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use git2::{Signature, Time};
    use tempfile::TempDir;

    fn commit(repo: &Git2Repo, message: &str, seconds: i64) -> git2::Oid {
        let sig = Signature::new("Test User", "test@example.com", &Time::new(seconds, 0))
            .expect("Could not create signature");
        let tree_id = repo
            .index()
            .and_then(|mut index| index.write_tree())
            .expect("Could not write tree");
        let tree = repo.find_tree(tree_id).expect("Could not find tree");
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    #[test]
    fn test_open_missing_path() {
        let err = Git2Repository::open("/path/that/does/not/exist").err();
        assert!(matches!(err, Some(GitSemverError::RepoNotFound(_))));
    }

    #[test]
    fn test_empty_repository_has_no_head() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repository::from_git2(Git2Repo::init(dir.path()).unwrap());
        assert!(matches!(repo.head_commit(), Err(GitSemverError::NoHead)));
        assert!(matches!(repo.history(), Err(GitSemverError::NoHead)));
        assert!(repo.tags().unwrap().is_empty());
    }

    #[test]
    fn test_history_is_newest_first() {
        let dir = TempDir::new().unwrap();
        let git = Git2Repo::init(dir.path()).unwrap();
        let first = commit(&git, "first", 1_000);
        let second = commit(&git, "second", 2_000);

        let repo = Git2Repository::from_git2(git);
        assert_eq!(repo.head_commit().unwrap(), second.to_string());
        assert_eq!(
            repo.history().unwrap(),
            vec![second.to_string(), first.to_string()]
        );
    }

    #[test]
    fn test_tag_timestamps() {
        let dir = TempDir::new().unwrap();
        let git = Git2Repo::init(dir.path()).unwrap();
        let oid = commit(&git, "first", 1_000);
        let target = git.find_object(oid, None).unwrap();

        git.tag_lightweight("1.0.0", &target, false).unwrap();
        let tagger = Signature::new("Tagger", "t@example.com", &Time::new(5_000, 0)).unwrap();
        git.tag("v1.0.1", &target, &tagger, "release", false)
            .unwrap();
        drop(target);

        let repo = Git2Repository::from_git2(git);
        let mut tags = repo.tags().unwrap();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            tags,
            vec![
                TagRef::new("1.0.0", oid.to_string(), 1_000),
                TagRef::new("v1.0.1", oid.to_string(), 5_000),
            ]
        );
    }

    #[test]
    fn test_tags_on_trees_and_blobs_are_skipped() {
        use crate::analyzer::HeadAnalyzer;
        use crate::domain::{TagMatcher, TagResolver};

        let dir = TempDir::new().unwrap();
        let git = Git2Repo::init(dir.path()).unwrap();
        let first = commit(&git, "first", 1_000);
        let head = commit(&git, "second", 2_000);

        let release = git.find_object(first, None).unwrap();
        git.tag_lightweight("v1.0.0", &release, false).unwrap();

        let tree_id = git.find_commit(head).unwrap().tree_id();
        let tree = git.find_object(tree_id, None).unwrap();
        git.tag_lightweight("v9.0.0", &tree, false).unwrap();

        let blob_id = git.blob(b"not a commit").unwrap();
        let blob = git.find_object(blob_id, None).unwrap();
        git.tag_lightweight("v8.0.0", &blob, false).unwrap();
        drop((release, tree, blob));

        let repo = Git2Repository::from_git2(git);
        assert_eq!(
            repo.tags().unwrap(),
            vec![TagRef::new("v1.0.0", first.to_string(), 1_000)]
        );

        let analyzer = HeadAnalyzer::new(TagResolver::new(TagMatcher::any(), "v"));
        let described = analyzer.analyze(&repo).unwrap();
        assert_eq!(described.last_tag, "v1.0.0");
        assert_eq!(described.commits_since_tag, 1);
        assert_eq!(described.commit_hash, head.to_string());
    }
}
