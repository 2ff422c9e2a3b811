//! Indentation settings.
//!
//! Settings are passed explicitly into every engine call; there is no
//! process-wide state.

use serde::Deserialize;
use thiserror::Error;

/// Largest accepted `indent-width` and `tab-width`.
pub const MAX_WIDTH: u32 = 64;

/// Errors produced while loading or validating an [`IndentConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `indent-width` was zero.
    #[error("indent-width must be at least 1")]
    ZeroIndentWidth,
    /// `tab-width` was zero.
    #[error("tab-width must be at least 1")]
    ZeroTabWidth,
    /// `indent-width` exceeded [`MAX_WIDTH`].
    #[error("indent-width must be at most {max}, got {0}", max = MAX_WIDTH)]
    IndentWidthTooLarge(u32),
    /// `tab-width` exceeded [`MAX_WIDTH`].
    #[error("tab-width must be at most {max}, got {0}", max = MAX_WIDTH)]
    TabWidthTooLarge(u32),
    /// The TOML text could not be parsed.
    #[error("invalid indentation config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Indentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IndentConfig {
    /// Columns per indentation level.
    pub indent_width: u32,
    /// Emit tabs (plus spaces for the remainder) instead of spaces only.
    pub use_tabs: bool,
    /// Display width of a tab, used both to read existing indentation and
    /// to write tabs.
    pub tab_width: u32,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            use_tabs: false,
            tab_width: 8,
        }
    }
}

impl IndentConfig {
    /// Parses and validates settings from TOML text such as
    /// `indent-width = 4`.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the widths are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 {
            return Err(ConfigError::ZeroIndentWidth);
        }
        if self.tab_width == 0 {
            return Err(ConfigError::ZeroTabWidth);
        }
        if self.indent_width > MAX_WIDTH {
            return Err(ConfigError::IndentWidthTooLarge(self.indent_width));
        }
        if self.tab_width > MAX_WIDTH {
            return Err(ConfigError::TabWidthTooLarge(self.tab_width));
        }
        Ok(())
    }

    /// Returns the leading whitespace that reaches `column`.
    #[must_use]
    pub fn indent_string(&self, column: u32) -> String {
        if self.use_tabs {
            let tab_width = self.tab_width.max(1);
            let tabs = (column / tab_width) as usize;
            let spaces = (column % tab_width) as usize;
            let mut out = "\t".repeat(tabs);
            out.push_str(&" ".repeat(spaces));
            out
        } else {
            " ".repeat(column as usize)
        }
    }

    /// Returns the display column reached by the leading spaces and tabs of
    /// `line`.
    #[must_use]
    pub fn measure_indent(&self, line: &str) -> u32 {
        let tab_width = self.tab_width.max(1);
        let mut column: u32 = 0;
        for ch in line.chars() {
            match ch {
                ' ' => column = column.saturating_add(1),
                '\t' => column = (column / tab_width + 1).saturating_mul(tab_width),
                _ => break,
            }
        }
        column
    }
}
