//! Configuration file support for grant-report.
//!
//! Provides YAML-based configuration through `grant-report.config.yml` files,
//! including data structures, file loading, validation and merging with the
//! command line.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use grant_report::application::dto::OutputFormat;
use grant_report::shared::error::ReportError;
use grant_report::shared::Result;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "grant-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub fail_on_denied: Option<bool>,
    pub fail_on_unlicensed: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Where the rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub output: OutputTarget,
    pub fail_on_denied: bool,
    pub fail_on_unlicensed: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// A config file together with where it came from.
#[derive(Debug)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub auto_discovered: bool,
    pub file: ConfigFile,
}

impl LoadedConfig {
    pub fn describe(&self) -> String {
        if self.auto_discovered {
            format!("📄 Auto-discovered config file: {}", self.path.display())
        } else {
            format!("📄 Loaded config from: {}", self.path.display())
        }
    }
}

/// Loads the config selected by the command line: `--config`, then
/// auto-discovery in the working directory unless `--no-config`.
pub fn load_for_args(args: &Args) -> Result<Option<LoadedConfig>> {
    if let Some(path) = &args.config {
        let file = load_config_from_path(path)?;
        return Ok(Some(LoadedConfig {
            path: path.clone(),
            auto_discovered: false,
            file,
        }));
    }
    if args.no_config {
        return Ok(None);
    }

    let dir = Path::new(".");
    Ok(discover_config(dir)?.map(|file| LoadedConfig {
        path: dir.join(CONFIG_FILENAME),
        auto_discovered: true,
        file,
    }))
}

/// Merges config values under command-line flags. Flags win; booleans are OR-ed.
pub fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Result<Settings> {
    let default_config = ConfigFile::default();
    let config = config.unwrap_or(&default_config);

    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(value)) => parse_format(value)?,
        (None, None) => OutputFormat::default(),
    };

    // A command-line destination of either kind replaces the config's.
    let (output, output_dir) = if args.output.is_some() || args.output_dir.is_some() {
        (args.output.clone(), args.output_dir.clone())
    } else {
        (config.output.clone(), config.output_dir.clone())
    };

    let output = match (output, output_dir) {
        (Some(path), _) => OutputTarget::File(path),
        (None, Some(dir)) => OutputTarget::File(dir.join(format.default_file_name())),
        (None, None) => OutputTarget::Stdout,
    };

    Ok(Settings {
        format,
        output,
        fail_on_denied: args.fail_on_denied || config.fail_on_denied.unwrap_or(false),
        fail_on_unlicensed: args.fail_on_unlicensed || config.fail_on_unlicensed.unwrap_or(false),
    })
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(value).map_err(|message| {
        ReportError::Validation {
            message: format!("config field 'format': {}", message),
        }
        .into()
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        parse_format(format)?;
    }
    if config.output.is_some() && config.output_dir.is_some() {
        return Err(ReportError::Validation {
            message: "config fields 'output' and 'output_dir' cannot be used together".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
