//! Inspect command
//!
//! Decode a payload and print it as a thread tree or normalized JSON.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use comments_core::codec;
use comments_core::config::{Config, OutputConfig};
use comments_core::{Comment, CommentAttachment, CommentList, CommentState, CommentVersion};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Which entity the payload holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    /// A page of comments
    List,
    /// A single comment
    Comment,
    /// A version history (array of versions)
    Versions,
    /// A comment attachment
    Attachment,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented thread view
    Tree,
    /// Re-encoded wire JSON
    Json,
}

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Payload file (`-` for stdin)
    pub file: PathBuf,

    /// Entity the payload holds
    #[arg(long, short, value_enum, default_value = "list")]
    pub kind: PayloadKind,

    /// Output format (defaults to the configured format)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include deleted comments in tree output
    #[arg(long)]
    pub show_deleted: bool,
}

/// Execute the inspect command
pub fn execute(args: InspectArgs, config: &Config) -> Result<()> {
    let payload = super::read_payload(&args.file)?;

    let format = match args.format {
        Some(format) => format,
        None => OutputFormat::from_str(&config.output.format, true)
            .map_err(|e| anyhow::anyhow!("Invalid output.format in configuration: {}", e))?,
    };
    let mut output = config.output.clone();
    output.show_deleted |= args.show_deleted;

    let context = || format!("Failed to decode {}", args.file.display());
    let rendered = match args.kind {
        PayloadKind::List => {
            let list: CommentList = codec::decode(&payload).with_context(context)?;
            match format {
                OutputFormat::Tree => render_list(&list, &output),
                OutputFormat::Json => codec::encode_pretty(&list)?,
            }
        }
        PayloadKind::Comment => {
            let comment: Comment = codec::decode(&payload).with_context(context)?;
            match format {
                OutputFormat::Tree => {
                    let list = CommentList::new(vec![comment], 1);
                    render_list(&list, &output)
                }
                OutputFormat::Json => codec::encode_pretty(&comment)?,
            }
        }
        PayloadKind::Versions => {
            let versions: Vec<CommentVersion> = codec::decode(&payload).with_context(context)?;
            match format {
                OutputFormat::Tree => render_versions(&versions, &output),
                OutputFormat::Json => codec::encode_pretty(&versions)?,
            }
        }
        PayloadKind::Attachment => {
            let attachment: CommentAttachment = codec::decode(&payload).with_context(context)?;
            match format {
                OutputFormat::Tree => format!(
                    "attachment {} by {} on {}\n  {}\n",
                    attachment.id.cyan(),
                    attachment.created_by.label(),
                    attachment.created_date.format("%Y-%m-%d %H:%M"),
                    attachment.reference.url.dimmed()
                ),
                OutputFormat::Json => codec::encode_pretty(&attachment)?,
            }
        }
    };

    println!("{}", rendered.trim_end());
    Ok(())
}

/// Render a page as an indented thread tree
pub fn render_list(list: &CommentList, output: &OutputConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} of {} comments",
        list.count.to_string().yellow(),
        list.total_count
    );

    for (depth, comment) in list.iter_threads() {
        if comment.is_deleted && !output.show_deleted {
            continue;
        }
        let indent = "  ".repeat(depth);
        let _ = writeln!(
            out,
            "{}#{} [{}] v{} {} {}{}",
            indent,
            comment.id.to_string().cyan(),
            state_label(comment.state),
            comment.version,
            comment.created_by.label().bold(),
            comment.modified_date.format("%Y-%m-%d %H:%M"),
            if comment.is_deleted { " (deleted)".red().to_string() } else { String::new() }
        );
        let _ = writeln!(out, "{}  {}", indent, truncate(&comment.text, output.max_text_width));

        if !comment.reactions.is_empty() {
            let reactions: Vec<String> = comment
                .reactions
                .iter()
                .map(|r| {
                    let marker = if r.is_current_user_engaged { "*" } else { "" };
                    format!("{}{}x{}", r.kind, marker, r.count)
                })
                .collect();
            let _ = writeln!(out, "{}  reactions: {}", indent, reactions.join(" "));
        }

        if !comment.mentions.is_empty() {
            let mentions: Vec<String> = comment
                .mentions
                .iter()
                .map(|m| match m.target() {
                    Ok(target) => target.to_string(),
                    Err(_) => format!("{}:{}?", m.kind, m.mentioned_artifact),
                })
                .collect();
            let _ = writeln!(out, "{}  mentions: {}", indent, mentions.join(" "));
        }
    }

    if let Some(token) = &list.continuation_token {
        let _ = writeln!(out, "more comments available (continuation token {})", token.dimmed());
    } else if let Some(next) = &list.next_page {
        let _ = writeln!(out, "more comments available at {}", next.dimmed());
    }

    out
}

/// Render a version history, oldest first as given
pub fn render_versions(versions: &[CommentVersion], output: &OutputConfig) -> String {
    let mut out = String::new();
    for version in versions {
        let _ = writeln!(
            out,
            "#{} v{} [{}] {} {}{}",
            version.id.to_string().cyan(),
            version.version,
            state_label(version.state),
            version.modified_by.label().bold(),
            version.modified_date.format("%Y-%m-%d %H:%M"),
            if version.is_deleted { " (deleted)" } else { "" }
        );
        let _ = writeln!(out, "  {}", truncate(&version.text, output.max_text_width));
    }
    out
}

fn state_label(state: CommentState) -> String {
    match state {
        CommentState::Active => state.name().green().to_string(),
        CommentState::Resolved => state.name().blue().to_string(),
        CommentState::Closed => state.name().dimmed().to_string(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() <= width && !text.contains('\n') {
        return line.to_string();
    }
    let cut: String = line.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", cut)
}
