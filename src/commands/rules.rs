use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::classifier::Classifier;
use crate::cli::RulesFormat;
use crate::config;

/// Print the effective rule set so hosts can see exactly what a
/// classification would run against. Routing through the classifier means
/// the output reflects construction-time normalization too.
pub fn print_rules(format: RulesFormat, config_path: Option<PathBuf>) -> Result<()> {
    let rules = match config_path {
        Some(path) => config::load_config_from_path(&path)
            .with_context(|| format!("failed to load rules from {}", path.display()))?,
        None => config::load_config(),
    };
    let classifier = Classifier::from_config(rules)?;

    let rendered = match format {
        RulesFormat::Json => serde_json::to_string_pretty(classifier.rules())?,
        RulesFormat::Toml => toml::to_string_pretty(classifier.rules())?,
    };
    println!("{rendered}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::RulesConfig;

    #[test]
    fn test_default_rules_serialize_to_toml_and_back() {
        let rules = RulesConfig::default();
        let rendered = toml::to_string_pretty(&rules).unwrap();
        let parsed: RulesConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, rules);
    }

    #[test]
    fn test_default_rules_serialize_to_json() {
        let rules = RulesConfig::default();
        let json = serde_json::to_value(&rules).unwrap();
        assert_eq!(json["thresholds"]["spam"], 60);
        assert_eq!(json["weights"]["high"], 25);
    }
}
