use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::classifier::Classifier;
use crate::config::RulesConfig;
use crate::core::Classification;
use crate::{config, io};

pub struct ClassifyConfig {
    pub message: Option<String>,
    pub file: Option<PathBuf>,
    pub format: crate::cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub verbosity: u8,
}

/// Run one classification and write the result in the requested format.
/// The classification is returned so the caller can map the verdict onto
/// an exit code.
pub fn classify_message(config: ClassifyConfig) -> Result<Classification> {
    let rules = load_rules(config.config.as_deref())?;
    let classifier = Classifier::from_config(rules)?;

    let text = read_message(config.message, config.file.as_deref())?;
    let result = classifier.classify(&text)?;

    let mut writer = io::output::create_writer(
        config.format.into(),
        config.output.as_deref(),
        config.verbosity,
    )?;
    writer.write_classification(&result)?;

    Ok(result)
}

/// An explicit --config path must load; without one, fall back to
/// discovery with defaults.
fn load_rules(path: Option<&Path>) -> Result<RulesConfig> {
    match path {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("failed to load rules from {}", path.display())),
        None => Ok(config::load_config()),
    }
}

fn read_message(message: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(message) = message {
        return Ok(message);
    }
    if let Some(path) = file {
        return io::read_file(path)
            .with_context(|| format!("failed to read message from {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read message from stdin")?;
    Ok(buffer)
}
