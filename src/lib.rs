// Export modules for library usage
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod io;

// Re-export commonly used types
pub use crate::classifier::Classifier;

pub use crate::core::{
    Classification, FormattingKind, KeywordTier, PassScore, PatternKind, Reason,
};

pub use crate::config::{
    load_config, load_config_from_path, parse_and_validate_config, FormattingRuleConfig,
    KeywordsConfig, PatternRuleConfig, RulesConfig, StructureConfig, ThresholdsConfig,
    WeightsConfig,
};

pub use crate::error::{ClassifyError, ConfigError};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
