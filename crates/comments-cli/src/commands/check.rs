//! Check command
//!
//! Decode a payload and report every broken model invariant.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use comments_core::codec;
use comments_core::{CommentList, CommentValidator, CommentVersion, Violation};
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Payload file (`-` for stdin)
    pub file: PathBuf,

    /// Treat the payload as a version history instead of a comment list
    #[arg(long)]
    pub versions: bool,

    /// Do not descend into expanded replies
    #[arg(long)]
    pub shallow: bool,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<()> {
    let payload = super::read_payload(&args.file)?;
    let validator = if args.shallow {
        CommentValidator::shallow()
    } else {
        CommentValidator::new()
    };

    let (violations, checked) = if args.versions {
        let versions: Vec<CommentVersion> = codec::decode(&payload)
            .with_context(|| format!("Failed to decode {}", args.file.display()))?;
        (validator.check_versions(&versions), format!("{} versions", versions.len()))
    } else {
        let list: CommentList = codec::decode(&payload)
            .with_context(|| format!("Failed to decode {}", args.file.display()))?;
        let total = list.iter_threads().count();
        (validator.check_list(&list), format!("{} comments", total))
    };

    report(&violations, &checked)
}

fn report(violations: &[Violation], checked: &str) -> Result<()> {
    if violations.is_empty() {
        println!("{} {} checked, no violations", "✓".green(), checked);
        return Ok(());
    }

    for violation in violations {
        println!("{} {}", "✗".red(), violation);
    }
    tracing::debug!("{} violations in {}", violations.len(), checked);
    bail!("{} invariant violation(s) found", violations.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use comments_core::CommentId;

    #[test]
    fn test_report_clean() {
        assert!(report(&[], "3 comments").is_ok());
    }

    #[test]
    fn test_report_fails_on_violations() {
        let violations = vec![Violation::VersionRegression {
            comment: CommentId(1),
            previous: 3,
            next: 2,
        }];
        let err = report(&violations, "2 versions").unwrap_err();
        assert_eq!(err.to_string(), "1 invariant violation(s) found");
    }
}
