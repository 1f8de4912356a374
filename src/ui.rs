//! Terminal output. The version goes to stdout, everything else to stderr.

use console::style;

use crate::boundary::BoundaryWarning;

/// Print the derived version on stdout
pub fn display_version(version: &str) {
    println!("{}", version);
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_boundary_warning() {
        display_boundary_warning(&BoundaryWarning::NoTags { commits: 1 });
    }
}
