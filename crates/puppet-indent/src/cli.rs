//! CLI definitions for puppet-indent.

use clap::{ArgAction, Parser};
use puppet_ide::MAX_WIDTH;
use std::path::PathBuf;

/// Inclusive, zero-based line range parsed from `START:END` (one-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Parser)]
#[command(
    name = "puppet-indent",
    version,
    about = "Reindent Puppet manifests",
    after_help = "Examples:\n  puppet-indent manifests/init.pp          # print the reindented file\n  puppet-indent --write manifests/         # rewrite every .pp file in place\n  puppet-indent --check manifests/         # exit 1 if anything would change\n  puppet-indent --range 10:20 site.pp      # only lines 10 to 20"
)]
pub struct Cli {
    /// Exit with status 1 if any file would be reindented.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "write")]
    pub check: bool,
    /// Rewrite files in place instead of printing them.
    #[arg(long, action = ArgAction::SetTrue)]
    pub write: bool,
    /// Only reindent lines START to END (one-based, inclusive).
    #[arg(long, value_name = "START:END", value_parser = parse_range)]
    pub range: Option<LineRange>,
    /// Configuration file (defaults to puppet-indent.toml in the current directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Columns per indentation level.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WIDTH)))]
    pub indent_width: Option<u32>,
    /// Indent with tabs.
    #[arg(long, action = ArgAction::SetTrue)]
    pub use_tabs: bool,
    /// Log every indentation decision.
    #[arg(long, short, action = ArgAction::SetTrue)]
    pub verbose: bool,
    /// Files or directories to reindent.
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

fn parse_range(value: &str) -> Result<LineRange, String> {
    let (start, end) = value
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got `{value}`"))?;
    let start: u32 = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid start line `{start}`"))?;
    let end: u32 = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid end line `{end}`"))?;
    if start == 0 || end < start {
        return Err(format!("invalid line range {start}:{end}"));
    }
    Ok(LineRange {
        start: start - 1,
        end: end - 1,
    })
}
