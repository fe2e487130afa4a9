// Sub-modules
mod loader;
mod rules;

// Re-export rule-set types
pub use rules::{
    default_email_count, default_email_pattern, default_formatting, default_formatting_weight,
    default_high_keywords, default_high_weight, default_low_keywords, default_low_weight,
    default_many_emails_weight, default_many_urls_weight, default_max_input_len,
    default_medium_keywords, default_medium_weight, default_multi_keyword_bonus,
    default_multi_keyword_count, default_pattern_weight, default_patterns,
    default_phone_number_weight, default_phone_pattern, default_short_message_len,
    default_short_message_weight, default_spam_threshold, default_url_count, default_url_pattern,
    FormattingRuleConfig, KeywordsConfig, PatternRuleConfig, RulesConfig, StructureConfig,
    ThresholdsConfig, WeightsConfig,
};

// Re-export loader functions
pub use loader::{load_config, load_config_from_path, parse_and_validate_config, CONFIG_FILE_NAME};
