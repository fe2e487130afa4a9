use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::rules::RulesConfig;
use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = ".spamsift.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<RulesConfig, ConfigError> {
    let config = toml::from_str::<RulesConfig>(contents).map_err(|e| ConfigError::Parse {
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from an explicit path. Failures are hard errors:
/// a caller who names a file wants that file, not silent defaults.
pub fn load_config_from_path(path: &Path) -> Result<RulesConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_and_validate_config(&contents)
}

/// Load configuration by walking from the working directory toward the
/// filesystem root, taking the first `.spamsift.toml` found. A missing or
/// broken file falls back to defaults with a logged warning.
pub fn load_config() -> RulesConfig {
    std::env::current_dir()
        .ok()
        .and_then(|dir| find_config_file(&dir))
        .and_then(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Pure function to locate the nearest config file above `start`
pub(crate) fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RulesConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded rules from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}: {}. Using default rules.", config_path.display(), e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_empty_toml_gives_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn test_parse_override_merges_with_defaults() {
        let contents = indoc! {r#"
            [weights]
            high = 40

            [thresholds]
            spam = 75
        "#};
        let config = parse_and_validate_config(contents).unwrap();
        assert_eq!(config.weights.high, 40);
        assert_eq!(config.weights.medium, 10);
        assert_eq!(config.thresholds.spam, 75);
    }

    #[test]
    fn test_parse_rejects_bad_pattern() {
        let contents = indoc! {r#"
            [[patterns]]
            pattern = "(unclosed"
            reason = "click_request"
        "#};
        assert!(parse_and_validate_config(contents).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let err = parse_and_validate_config("not = [valid").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_config_from_missing_path_is_io_error() {
        let err = load_config_from_path(Path::new("/nonexistent/.spamsift.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_find_config_file_walks_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_find_config_file_none_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_file(dir.path()).is_none());
    }
}
