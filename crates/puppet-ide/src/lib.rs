//! `puppet-ide` - Editor features for Puppet manifests.
//!
//! This crate provides editor functionality built on top of `puppet-syntax`:
//!
//! - **Indentation**: Structural indentation inference driven by an
//!   ordered, first-match-wins rule table
//! - **Reindentation**: Rewrite the leading whitespace of whole documents
//!   or line ranges
//! - **Highlighting**: Token categories for display, with `ERROR` regions
//!   flagged
//!
//! # Architecture
//!
//! All features are pure functions over an immutable [`Snapshot`] and an
//! explicit [`IndentConfig`]; nothing is cached between calls.
//!
//! ```
//! use puppet_ide::{reindent, IndentConfig};
//!
//! let text = "class foo {\n$bar = 'hello'\n}\n";
//! assert_eq!(
//!     reindent(text, &IndentConfig::default()),
//!     "class foo {\n  $bar = 'hello'\n}\n"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod highlight;
pub mod indent;
pub mod line_index;
pub mod rules;
pub mod snapshot;

use std::path::Path;

pub use config::{ConfigError, IndentConfig, MAX_WIDTH};
pub use highlight::{error_ranges, highlight, Category, StyleSpan};
pub use indent::{
    decide, decide_with, indent_line, indent_region, indent_region_with, reindent,
    reindent_range, IndentDecision, PRESERVE,
};
pub use line_index::LineIndex;
pub use rules::{Anchor, IndentRule, LineContext, Matcher, RuleSet, RuleSetError};
pub use snapshot::Snapshot;

/// File extensions handled by default.
pub const PUPPET_EXTENSIONS: &[&str] = &["pp"];

/// Returns `true` if `path` has a Puppet manifest extension.
#[must_use]
pub fn is_puppet_file(path: &Path) -> bool {
    has_extension(path, PUPPET_EXTENSIONS)
}

/// Returns `true` if `path`'s extension is one of `extensions`, ignoring
/// ASCII case.
#[must_use]
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(extension))
}
