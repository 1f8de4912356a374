use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use git_semver::cli::{self, FormatOptions, RunArgs, RunOutcome};
use git_semver::config;
use git_semver::domain::Target;
use git_semver::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    about = "Derive a semantic version from the tags and history of a git repository"
)]
struct Args {
    #[arg(help = "Repository path (default: current directory)")]
    repo: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Prefix of the version string, e.g. v (replaces the tag's prefix)")]
    prefix: Option<String>,

    #[arg(long, help = "Exclude the prefix", conflicts_with = "prefix")]
    no_prefix: bool,

    #[arg(long, help = "Format string, e.g. x.y.z-p+m")]
    format: Option<String>,

    #[arg(long, help = "Exclude the commit hash")]
    no_hash: bool,

    #[arg(long, help = "Exclude build metadata")]
    no_meta: bool,

    #[arg(long, help = "Set build metadata")]
    set_meta: Option<String>,

    #[arg(long, help = "Exclude the pre-release version")]
    no_pre: bool,

    #[arg(long, help = "Exclude the patch version")]
    no_patch: bool,

    #[arg(long, help = "Exclude the minor version")]
    no_minor: bool,

    #[arg(long, help = "Ignore shorthand options if the version contains a pre-release")]
    guard: bool,

    #[arg(long, help = "Version to derive: dev, patch, minor or major")]
    target: Option<Target>,

    #[arg(long = "match", value_name = "GLOB", help = "Only consider tags matching the glob")]
    pattern: Option<String>,

    #[arg(long, help = "Only consider tags that are valid semantic versions")]
    semver_only: bool,

    #[arg(long, help = "Print diagnostic logs to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

impl Args {
    fn into_run_args(self) -> RunArgs {
        RunArgs {
            repo_path: self.repo,
            prefix: self.prefix,
            no_prefix: self.no_prefix,
            set_meta: self.set_meta,
            target: self.target,
            pattern: self.pattern,
            semver_only: self.semver_only,
            format: FormatOptions {
                format: self.format,
                no_hash: self.no_hash,
                no_meta: self.no_meta,
                no_pre: self.no_pre,
                no_patch: self.no_patch,
                no_minor: self.no_minor,
                guard: self.guard,
            },
        }
    }
}

/// Load configuration and derive the version for the parsed arguments
fn execute(args: Args) -> anyhow::Result<RunOutcome> {
    let config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;
    let outcome = cli::run(args.into_run_args(), &config)?;
    Ok(outcome)
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("git-semver {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // CLI works without logging
    let _ = logging::init_logging(args.verbose);

    match execute(args) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                ui::display_boundary_warning(warning);
            }
            ui::display_version(&outcome.version);
        }
        Err(e) => {
            debug!(error = ?e, "version derivation failed");
            ui::display_error(&format!("{:#}", e));
            process::exit(1);
        }
    }
}
