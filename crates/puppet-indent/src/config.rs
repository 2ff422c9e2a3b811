//! Configuration loading for puppet-indent.

use std::path::{Path, PathBuf};

use puppet_ide::{IndentConfig, PUPPET_EXTENSIONS};
use serde::Deserialize;
use tracing::{debug, warn};

/// Configuration file names searched in the working directory.
pub(crate) const CONFIG_FILES: &[&str] = &["puppet-indent.toml", ".puppet-indent.toml"];

/// Settings loaded from `puppet-indent.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path the settings were read from, if any.
    pub config_path: Option<PathBuf>,
    /// Indentation settings handed to the engine.
    pub indent: IndentConfig,
    /// File extensions picked up when walking directories.
    pub extensions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct ConfigFile {
    #[serde(flatten)]
    indent: IndentConfig,
    extensions: Vec<String>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            indent: IndentConfig::default(),
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    PUPPET_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect()
}

impl Settings {
    fn base(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            indent: IndentConfig::default(),
            extensions: default_extensions(),
        }
    }

    /// Loads settings from `explicit`, or from the first of [`CONFIG_FILES`]
    /// found in `root`. Missing or invalid files fall back to defaults.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Self {
        let Some(path) = explicit
            .map(Path::to_path_buf)
            .or_else(|| find_config_file(root))
        else {
            return Self::base(None);
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            warn!("Failed to read puppet-indent config at {}", path.display());
            return Self::base(Some(path));
        };
        Self::from_contents(Some(path), &contents)
    }

    /// Parses settings from TOML text.
    pub fn from_contents(config_path: Option<PathBuf>, contents: &str) -> Self {
        let parsed: ConfigFile = match toml::from_str(contents) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("Failed to parse puppet-indent config: {err}");
                return Self::base(config_path);
            }
        };
        if let Err(err) = parsed.indent.validate() {
            warn!("Ignoring puppet-indent config: {err}");
            return Self::base(config_path);
        }
        debug!(?config_path, indent = ?parsed.indent, "loaded config");
        Self {
            config_path,
            indent: parsed.indent,
            extensions: parsed.extensions,
        }
    }

    /// Applies command line overrides.
    #[must_use]
    pub fn with_overrides(mut self, indent_width: Option<u32>, use_tabs: bool) -> Self {
        if let Some(width) = indent_width {
            self.indent.indent_width = width;
        }
        if use_tabs {
            self.indent.use_tabs = true;
        }
        self
    }
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_kebab_case_keys() {
        let settings = Settings::from_contents(
            None,
            "indent-width = 4\nuse-tabs = true\ntab-width = 4\nextensions = [\"pp\", \"epp\"]\n",
        );
        assert_eq!(
            settings.indent,
            IndentConfig {
                indent_width: 4,
                use_tabs: true,
                tab_width: 4,
            }
        );
        assert_eq!(settings.extensions, vec!["pp", "epp"]);
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        assert_eq!(Settings::from_contents(None, "indent-width = ["), Settings::base(None));
        assert_eq!(Settings::from_contents(None, "indent-width = 0"), Settings::base(None));
    }

    #[test]
    fn finds_dotfile_in_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(".puppet-indent.toml"), "indent-width = 3\n")
            .expect("write config");
        let settings = Settings::load(None, dir.path());
        assert_eq!(settings.indent.indent_width, 3);
        assert_eq!(
            settings.config_path,
            Some(dir.path().join(".puppet-indent.toml"))
        );
    }

    #[test]
    fn missing_explicit_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.toml");
        let settings = Settings::load(Some(&path), dir.path());
        assert_eq!(settings.indent, IndentConfig::default());
        assert_eq!(settings.config_path, Some(path));
    }

    #[test]
    fn flags_override_file() {
        let settings = Settings::base(None).with_overrides(Some(8), true);
        assert_eq!(settings.indent.indent_width, 8);
        assert!(settings.indent.use_tabs);
    }
}
