//! `puppet-indent` - Reindent Puppet manifests.
//!
//! Prints the reindented text of each file, rewrites files in place with
//! `--write`, or reports files that would change with `--check`.

mod cli;
mod config;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use puppet_ide::{has_extension, reindent_range, IndentConfig};
use tracing::{debug, info, warn};

use crate::cli::{Cli, LineRange};
use crate::config::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `Ok(false)` when `--check` found files that would change.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let settings =
        Settings::load(cli.config.as_deref(), &cwd).with_overrides(cli.indent_width, cli.use_tabs);
    if let Some(path) = &settings.config_path {
        info!("Using config {}", path.display());
    }

    let files = collect_files(&cli.files, &settings.extensions)?;
    let mut clean = true;
    let stdout = std::io::stdout();
    for path in &files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let output = reindent_text(&text, cli.range, &settings.indent);
        if cli.check {
            if output != text {
                println!("would reindent {}", path.display());
                clean = false;
            }
        } else if cli.write {
            if output != text {
                std::fs::write(path, &output)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                debug!("reindented {}", path.display());
            }
        } else {
            stdout
                .lock()
                .write_all(output.as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(clean)
}

fn reindent_text(text: &str, range: Option<LineRange>, config: &IndentConfig) -> String {
    let (start, end) = range.map_or((0, u32::MAX), |range| (range.start, range.end));
    reindent_range(text, start, end, config)
}

/// Expands directories into the manifests they contain. Files named
/// explicitly are kept whatever their extension.
fn collect_files(paths: &[PathBuf], extensions: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, extensions, &mut files)?;
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn walk_dir(dir: &Path, extensions: &[String], files: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(err) => warn!("Skipping entry in {}: {err}", dir.display()),
        }
    }
    paths.sort();
    for path in paths {
        if path.is_dir() {
            walk_dir(&path, extensions, files)?;
        } else if has_extension(&path, extensions) {
            files.push(path);
        }
    }
    Ok(())
}
