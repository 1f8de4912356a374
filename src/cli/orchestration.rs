//! Main workflow orchestration logic
//!
//! Turns resolved options into a version string: describe the repository
//! head, parse it, bump it, then format it. Kept apart from argument parsing
//! so the workflow can be called programmatically without clap.

use std::path::PathBuf;

use tracing::debug;

use crate::analyzer::HeadAnalyzer;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{
    bump_to, parse_from_head, RepoHead, TagMatcher, TagResolver, Target, Version, FULL_FORMAT,
    NO_META_FORMAT, NO_MINOR_FORMAT, NO_PATCH_FORMAT, NO_PRE_FORMAT,
};
use crate::error::Result;
use crate::git::{Git2Repository, Repository};

/// Options that decide which format string is used
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    /// Explicit format string
    pub format: Option<String>,
    pub no_hash: bool,
    pub no_meta: bool,
    pub no_pre: bool,
    pub no_patch: bool,
    pub no_minor: bool,
    /// Ignore shorthand formats when the version carries a pre-release
    pub guard: bool,
}

/// Arguments for one invocation, after merging command line and config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// Repository path; the working directory when `None`
    pub repo_path: Option<PathBuf>,

    /// Output prefix replacing the parsed one
    pub prefix: Option<String>,
    pub no_prefix: bool,

    /// Build metadata replacing the derived one
    pub set_meta: Option<String>,

    pub target: Option<Target>,

    /// Glob tag names must match
    pub pattern: Option<String>,
    pub semver_only: bool,

    pub format: FormatOptions,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// The rendered version
    pub version: String,

    pub warnings: Vec<BoundaryWarning>,
}

/// Pick the format string for `version`.
///
/// With the guard on and a pre-release to show, shorthand formats are
/// ignored. Otherwise an explicit format wins over the shorthand flags, and
/// the widest exclusion wins among those.
pub fn select_format(opts: &FormatOptions, version: &Version) -> String {
    let requested = opts.format.as_deref();
    if opts.guard && !version.rendered_pre_release().is_empty() {
        return match requested {
            Some(format) if format.contains(NO_META_FORMAT) => format.to_string(),
            _ if opts.no_hash || opts.no_meta => NO_META_FORMAT.to_string(),
            _ => FULL_FORMAT.to_string(),
        };
    }

    let format = match requested {
        Some(format) => format,
        None if opts.no_minor => NO_MINOR_FORMAT,
        None if opts.no_patch => NO_PATCH_FORMAT,
        None if opts.no_pre => NO_PRE_FORMAT,
        None if opts.no_hash || opts.no_meta => NO_META_FORMAT,
        None => FULL_FORMAT,
    };
    format.to_string()
}

/// Format that would be used without the guard, for reporting
fn unguarded_format(opts: &FormatOptions, version: &Version) -> String {
    let unguarded = FormatOptions {
        guard: false,
        ..opts.clone()
    };
    select_format(&unguarded, version)
}

/// Merge command-line arguments over the configuration file
pub fn merge_config(mut args: RunArgs, config: &Config) -> RunArgs {
    if args.target.is_none() {
        args.target = Some(config.output.target);
    }
    if args.pattern.is_none() {
        args.pattern = config.tags.pattern.clone();
    }
    args.semver_only |= config.tags.semver_only;
    if args.format.format.is_none() {
        args.format.format = config.output.format.clone();
    }
    args.format.guard |= config.output.guard;
    args
}

fn build_resolver(args: &RunArgs, recognized_prefix: &str) -> Result<TagResolver> {
    let mut matcher = TagMatcher::any();
    if let Some(pattern) = &args.pattern {
        matcher = matcher.with_glob(pattern)?;
    }
    if args.semver_only {
        matcher = matcher.semver_only(recognized_prefix);
    }
    Ok(TagResolver::new(matcher, recognized_prefix))
}

/// Derive the version from an already described head
pub fn derive(head: &RepoHead, args: &RunArgs, config: &Config) -> Result<RunOutcome> {
    let mut warnings = Vec::new();
    if head.last_tag.is_empty() {
        warnings.push(BoundaryWarning::NoTags {
            commits: head.commits_since_tag,
        });
    }

    let parsed = parse_from_head(head, &config.tags.prefix)?;
    let target = args.target.unwrap_or(config.output.target);
    let mut version = bump_to(&parsed, target);
    debug!(parsed = %parsed, bumped = %version, target = %target, "applied bump target");

    if let Some(meta) = &args.set_meta {
        version.meta = meta.clone();
    }
    if args.no_prefix {
        version.prefix.clear();
    } else if let Some(prefix) = &args.prefix {
        version.prefix = prefix.clone();
    }

    let format = select_format(&args.format, &version);
    let requested = unguarded_format(&args.format, &version);
    if format != requested {
        warnings.push(BoundaryWarning::GuardApplied {
            requested,
            used: format.clone(),
            pre_release: version.rendered_pre_release(),
        });
    }

    let rendered = version.format(&format)?;
    Ok(RunOutcome {
        version: rendered,
        warnings,
    })
}

/// Derive the version of a repository
pub fn run_with_repository<R: Repository>(
    repo: &R,
    args: &RunArgs,
    config: &Config,
) -> Result<RunOutcome> {
    let resolver = build_resolver(args, &config.tags.prefix)?;
    let head = HeadAnalyzer::new(resolver).analyze(repo)?;
    derive(&head, args, config)
}

/// Main workflow
///
/// 1. Open the repository at `args.repo_path` (or the working directory)
/// 2. Resolve the nearest eligible tag and the commits since it
/// 3. Parse, bump and format the version
pub fn run(args: RunArgs, config: &Config) -> Result<RunOutcome> {
    let args = merge_config(args, config);
    let path = match &args.repo_path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    debug!(path = %path.display(), "opening repository");

    let repo = Git2Repository::open(&path)?;
    run_with_repository(&repo, &args, config)
}
