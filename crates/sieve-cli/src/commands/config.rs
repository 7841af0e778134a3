//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sieve_engine::DedupConfig;
use std::path::{Path, PathBuf};

/// Execute the config command.
///
/// `path` is the file given with `--config`, if any; `effective` is the engine
/// configuration after command-line overrides.
pub fn execute_config(
    args: ConfigArgs,
    path: Option<&Path>,
    effective: &DedupConfig,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", formatter.format_config(effective)?);
        }
        ConfigAction::Init { force } => {
            let path = resolve_path(path)?;
            init_config(&path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            );
        }
    }
    Ok(())
}

/// Write the default configuration to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(path)
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::path(),
    }
}
