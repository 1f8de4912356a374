//! Format strings for rendering a [`Version`].
//!
//! A format is the token `x` (major), optionally followed, in this order, by
//! `.y` (minor), `.z` (patch), `-p` (pre-release) and `+m` (metadata). Any
//! other shape is rejected.

use super::version::Version;
use crate::error::{GitSemverError, Result};

pub const FULL_FORMAT: &str = "x.y.z-p+m";
pub const NO_META_FORMAT: &str = "x.y.z-p";
pub const NO_PRE_FORMAT: &str = "x.y.z";
pub const NO_PATCH_FORMAT: &str = "x.y";
pub const NO_MINOR_FORMAT: &str = "x";

/// Parsed format string: which components are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub minor: bool,
    pub patch: bool,
    pub pre_release: bool,
    pub meta: bool,
}

impl FormatSpec {
    /// Parse a format string such as `x.y.z-p+m` or `x.y`
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = || GitSemverError::InvalidFormat(spec.to_string());
        let rest = spec.strip_prefix('x').ok_or_else(invalid)?;
        let (minor, rest) = optional_token(rest, ".y");
        let (patch, rest) = optional_token(rest, ".z");
        let (pre_release, rest) = optional_token(rest, "-p");
        let (meta, rest) = optional_token(rest, "+m");
        if !rest.is_empty() {
            return Err(invalid());
        }

        Ok(FormatSpec {
            minor,
            patch,
            pre_release,
            meta,
        })
    }

    /// Every component, equivalent to [`FULL_FORMAT`]
    pub fn full() -> Self {
        FormatSpec {
            minor: true,
            patch: true,
            pre_release: true,
            meta: true,
        }
    }

    /// Render a version. Separators only appear between two non-empty parts.
    pub fn render(&self, version: &Version) -> String {
        let mut buf = Buffer::default();
        buf.push(&version.major.to_string(), '.');
        if self.minor {
            buf.push(&version.minor.to_string(), '.');
        }
        if self.patch {
            buf.push(&version.patch.to_string(), '.');
        }
        if self.pre_release {
            buf.push(&version.rendered_pre_release(), '-');
        }
        if self.meta {
            buf.push(&version.meta, '+');
        }
        format!("{}{}", version.prefix, buf.0)
    }
}

#[derive(Default)]
struct Buffer(String);

impl Buffer {
    fn push(&mut self, part: &str, sep: char) {
        if !part.is_empty() && !self.0.is_empty() {
            self.0.push(sep);
        }
        self.0.push_str(part);
    }
}

fn optional_token<'a>(input: &'a str, token: &str) -> (bool, &'a str) {
    match input.strip_prefix(token) {
        Some(rest) => (true, rest),
        None => (false, input),
    }
}

/// Render `version` according to the format string `spec`
pub fn format(version: &Version, spec: &str) -> Result<String> {
    Ok(FormatSpec::parse(spec)?.render(version))
}

impl Version {
    /// Render this version according to the format string `spec`
    pub fn format(&self, spec: &str) -> Result<String> {
        format(self, spec)
    }
}
