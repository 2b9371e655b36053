//! Query command
//!
//! Print the query string for a comment listing request, starting from the
//! configured defaults.

use anyhow::{Context, Result};
use clap::Args;
use comments_core::codec;
use comments_core::config::Config;
use comments_core::{CommentExpandOptions, CommentList, CommentQuery, CommentSortOrder};
use std::path::PathBuf;

/// Arguments for the query command
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Page size
    #[arg(long)]
    pub top: Option<u32>,

    /// Expand flags, e.g. "reactions,children" or "all"
    #[arg(long)]
    pub expand: Option<CommentExpandOptions>,

    /// Sort order (asc or desc)
    #[arg(long)]
    pub order: Option<CommentSortOrder>,

    /// Continuation token from a previous page
    #[arg(long, conflicts_with = "from_page")]
    pub continuation: Option<String>,

    /// Include deleted comments
    #[arg(long)]
    pub include_deleted: bool,

    /// Derive the continuation from a previously fetched page
    #[arg(long)]
    pub from_page: Option<PathBuf>,

    /// Print name/value pairs instead of a query string
    #[arg(long)]
    pub pairs: bool,
}

/// Execute the query command
pub fn execute(args: QueryArgs, config: &Config) -> Result<()> {
    let mut query = build_query(&args, config)?;

    if let Some(path) = &args.from_page {
        let payload = super::read_payload(path)?;
        let page: CommentList = codec::decode(&payload)
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        query = match query.next_page(&page) {
            Some(next) => next,
            None => {
                eprintln!("{} is the last page", path.display());
                return Ok(());
            }
        };
    }

    if args.pairs {
        for (name, value) in query.to_query_pairs() {
            println!("{}={}", name, value);
        }
    } else {
        println!("{}", query.to_query_string());
    }
    Ok(())
}

fn build_query(args: &QueryArgs, config: &Config) -> Result<CommentQuery> {
    let mut query = config.query().context("Invalid query defaults in configuration")?;
    if let Some(top) = args.top {
        query = query.top(top);
    }
    if let Some(expand) = args.expand {
        query = query.expand(expand);
    }
    if let Some(order) = args.order {
        query = query.order(order);
    }
    if let Some(token) = &args.continuation {
        query = query.continuation_token(token.clone());
    }
    if args.include_deleted {
        query = query.include_deleted(true);
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> QueryArgs {
        QueryArgs {
            top: None,
            expand: None,
            order: None,
            continuation: None,
            include_deleted: false,
            from_page: None,
            pairs: false,
        }
    }

    #[test]
    fn test_config_defaults_apply() {
        let query = build_query(&args(), &Config::default()).unwrap();
        assert_eq!(query.to_query_string(), "$expand=9&order=1");
    }

    #[test]
    fn test_flags_override_config() {
        let mut args = args();
        args.top = Some(10);
        args.expand = Some(CommentExpandOptions::ALL);
        args.order = Some(CommentSortOrder::Desc);
        args.continuation = Some("abc".to_string());

        let query = build_query(&args, &Config::default()).unwrap();
        assert_eq!(
            query.to_query_string(),
            "$top=10&continuationToken=abc&$expand=-17&order=2"
        );
    }
}
