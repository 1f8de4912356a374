//! Domain logic - pure versioning rules independent of git operations

pub mod bump;
pub mod format;
pub mod parser;
pub mod resolver;
pub mod tag;
pub mod version;

pub use bump::{bump_to, Target, DEFAULT_TARGET};
pub use format::{
    format, FormatSpec, FULL_FORMAT, NO_META_FORMAT, NO_MINOR_FORMAT, NO_PATCH_FORMAT,
    NO_PRE_FORMAT,
};
pub use parser::{effective_prefix, parse_from_head, parse_tag, RepoHead, DEFAULT_PREFIX};
pub use resolver::{TagMap, TagResolver};
pub use tag::{Tag, TagMatcher, TagRef};
pub use version::{compare, Component, Version};
