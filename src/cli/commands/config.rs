//! Config command implementation.

use std::path::Path;

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::FlightmarkError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// `override_path` is the `--config` value, if any.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved, the file cannot
/// be written, or output formatting fails.
pub fn config(
    cmd: ConfigCommands,
    config: &Config,
    override_path: Option<&Path>,
    format: OutputFormat,
) -> Result<String, FlightmarkError> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => Paths::new()?.config_file,
    };

    match cmd {
        ConfigCommands::Path => Ok(path.display().to_string()),
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => Ok(serde_yaml::to_string(config)?),
        },
        ConfigCommands::Init { force } => init_config(&path, force),
    }
}

fn init_config(path: &Path, force: bool) -> Result<String, FlightmarkError> {
    if path.exists() && !force {
        return Err(FlightmarkError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            Paths::with_root(parent.to_path_buf()).ensure_dirs()?;
        }
    }

    Config::default().save_to_path(path)?;
    log::info!("wrote default config to {}", path.display());
    Ok(format!("Wrote default config to {}", path.display())
        .green()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_config_path_override() {
        let path = PathBuf::from("/tmp/fm/config.yaml");
        let output = config(
            ConfigCommands::Path,
            &Config::default(),
            Some(&path),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert_eq!(output, "/tmp/fm/config.yaml");
    }

    #[test]
    fn test_config_show_json() {
        let output = config(
            ConfigCommands::Show,
            &Config::default(),
            Some(Path::new("unused.yaml")),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["tracking"]["default_mode"], "simple");
    }

    #[test]
    fn test_config_init_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sub").join("config.yaml");

        config(
            ConfigCommands::Init { force: false },
            &Config::default(),
            Some(&path),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(path.exists());
        assert!(Config::load_from_path(&path).is_ok());

        let err = config(
            ConfigCommands::Init { force: false },
            &Config::default(),
            Some(&path),
            OutputFormat::Pretty,
        )
        .unwrap_err();
        assert!(err.to_string().contains("--force"));

        config(
            ConfigCommands::Init { force: true },
            &Config::default(),
            Some(&path),
            OutputFormat::Pretty,
        )
        .unwrap();
    }
}
