pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod ui;

pub use domain::{bump_to, compare, format, parse_from_head, RepoHead, Target, Version};
pub use error::{GitSemverError, Result};
