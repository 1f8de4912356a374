use std::cmp::Ordering;
use std::fmt;

use super::format::FormatSpec;

/// Numeric component of a version core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => write!(f, "major"),
            Component::Minor => write!(f, "minor"),
            Component::Patch => write!(f, "patch"),
        }
    }
}

/// Semantic version derived from a repository head.
///
/// `pre_release` holds only what the tag itself declared. The pre-release that
/// is displayed also reflects how far the head is past the tag, see
/// [`Version::rendered_pre_release`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    /// Arbitrary text prepended to the output, not part of the ordering
    pub prefix: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Raw pre-release identifier parsed from the tag, empty if none
    pub pre_release: String,
    /// Commits since the resolved tag; zero means the head is the tagged commit
    pub commits: u64,
    /// Build metadata, either the explicit `+meta` of the tag or an abbreviated hash
    pub meta: String,
}

impl Version {
    /// Create a released version with the given numeric core
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            ..Version::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_pre_release(mut self, pre_release: impl Into<String>) -> Self {
        self.pre_release = pre_release.into();
        self
    }

    pub fn with_commits(mut self, commits: u64) -> Self {
        self.commits = commits;
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = meta.into();
        self
    }

    /// Whether the head is past the tagged commit
    pub fn is_development(&self) -> bool {
        self.commits > 0
    }

    /// Pre-release as displayed.
    ///
    /// At a tagged commit this is the parsed pre-release. Past it, `dev.<n>` is
    /// appended, or used alone when the tag declared no pre-release.
    pub fn rendered_pre_release(&self) -> String {
        match (self.commits, self.pre_release.is_empty()) {
            (0, _) => self.pre_release.clone(),
            (n, true) => format!("dev.{}", n),
            (n, false) => format!("{}.dev.{}", self.pre_release, n),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&FormatSpec::full().render(self))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then(self.commits.cmp(&other.commits))
            .then_with(|| self.meta.cmp(&other.meta))
            .then_with(|| self.to_string().cmp(&other.to_string()))
            // Distinct prefix/pre-release splits can render identically.
            .then_with(|| self.prefix.cmp(&other.prefix))
            .then_with(|| self.pre_release.cmp(&other.pre_release))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order over versions used by tag resolution.
///
/// `Less`, `Equal` and `Greater` stand for -1, 0 and 1.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}
