//! Choosing the tag that identifies the head's released version.
//!
//! Every eligible tag is assigned to the commit it targets; when several tags
//! target one commit a single winner is kept (see [`TagResolver::prefer`]).
//! History is then walked from the head until a commit with a winner is found.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::parser::{parse_tag, RepoHead};
use super::tag::{Tag, TagMatcher, TagRef};

/// Winning tag per commit hash
pub type TagMap = HashMap<String, Tag>;

#[derive(Debug, Clone)]
pub struct TagResolver {
    matcher: TagMatcher,
    recognized_prefix: String,
}

impl TagResolver {
    pub fn new(matcher: TagMatcher, recognized_prefix: impl Into<String>) -> Self {
        TagResolver {
            matcher,
            recognized_prefix: recognized_prefix.into(),
        }
    }

    /// Rank two tags on the same commit; `Greater` means `a` wins.
    ///
    /// The later timestamp wins. On equal timestamps the greater version wins,
    /// and a name that does not parse as a version loses to one that does.
    /// Two unparsable names fall back to plain name order.
    pub fn prefer(&self, a: &Tag, b: &Tag) -> Ordering {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| {
                let va = parse_tag(&a.name, &self.recognized_prefix);
                let vb = parse_tag(&b.name, &self.recognized_prefix);
                match (va, vb) {
                    (Ok(va), Ok(vb)) => va.cmp(&vb),
                    (Ok(_), Err(_)) => Ordering::Greater,
                    (Err(_), Ok(_)) => Ordering::Less,
                    (Err(_), Err(_)) => Ordering::Equal,
                }
            })
            .then_with(|| a.name.cmp(&b.name))
    }

    /// Assign each eligible tag to its commit, keeping one winner per commit
    pub fn tag_map<I>(&self, tags: I) -> TagMap
    where
        I: IntoIterator<Item = TagRef>,
    {
        let mut map = TagMap::new();
        for tag_ref in tags {
            if !self.matcher.matches(&tag_ref.name) {
                continue;
            }
            let candidate = tag_ref.to_tag();
            match map.get(&tag_ref.commit) {
                Some(current) if self.prefer(&candidate, current) != Ordering::Greater => {}
                _ => {
                    map.insert(tag_ref.commit, candidate);
                }
            }
        }
        map
    }

    /// Walk `history` (commit hashes from the head, newest first) to the
    /// nearest tagged commit.
    ///
    /// Exhausting history yields an empty tag and the number of commits walked.
    pub fn resolve<I, S>(&self, head: &str, history: I, tags: &TagMap) -> RepoHead
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(tag) = tags.get(head) {
            return RepoHead::new(tag.name.clone(), 0, head);
        }

        let mut commits = 0;
        for hash in history {
            if let Some(tag) = tags.get(hash.as_ref()) {
                return RepoHead::new(tag.name.clone(), commits, head);
            }
            commits += 1;
        }
        RepoHead::new("", commits, head)
    }
}
