//! Rule-set configuration for the classifier.
//!
//! Every keyword list, pattern, weight, and threshold the engine uses is
//! declared here so hosts can tune rules from `.spamsift.toml` without code
//! changes. Defaults reproduce the stock rule set exactly.

use crate::core::{FormattingKind, KeywordTier, PatternKind};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Complete rule set consumed by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub keywords: KeywordsConfig,
    pub weights: WeightsConfig,
    pub thresholds: ThresholdsConfig,
    pub patterns: Vec<PatternRuleConfig>,
    pub formatting: Vec<FormattingRuleConfig>,
    pub structure: StructureConfig,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordsConfig::default(),
            weights: WeightsConfig::default(),
            thresholds: ThresholdsConfig::default(),
            patterns: default_patterns(),
            formatting: default_formatting(),
            structure: StructureConfig::default(),
        }
    }
}

impl RulesConfig {
    /// Reject rule sets that would fail at call time.
    ///
    /// Every regex must compile and the decision thresholds must be usable;
    /// violations surface here, at construction, never inside `classify`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.patterns {
            compile_check(&rule.pattern)?;
        }
        for rule in &self.formatting {
            compile_check(&rule.pattern)?;
        }
        compile_check(&self.structure.url_pattern)?;
        compile_check(&self.structure.phone_pattern)?;
        compile_check(&self.structure.email_pattern)?;

        if self.thresholds.spam == 0 || self.thresholds.spam > 100 {
            return Err(ConfigError::InvalidThreshold {
                message: format!(
                    "spam threshold must be between 1 and 100, got {}",
                    self.thresholds.spam
                ),
            });
        }
        if self.thresholds.multi_keyword_count == 0 {
            return Err(ConfigError::InvalidThreshold {
                message: "multi_keyword_count must be at least 1".to_string(),
            });
        }
        if self.thresholds.max_input_len == 0 {
            return Err(ConfigError::InvalidThreshold {
                message: "max_input_len must be nonzero".to_string(),
            });
        }
        Ok(())
    }
}

fn compile_check(pattern: &str) -> Result<(), ConfigError> {
    regex::Regex::new(pattern)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Tiered keyword lists. Lists are matched by substring containment against
/// lowercased input; the classifier lowercases entries at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordsConfig {
    #[serde(default = "default_high_keywords")]
    pub high: Vec<String>,

    #[serde(default = "default_medium_keywords")]
    pub medium: Vec<String>,

    #[serde(default = "default_low_keywords")]
    pub low: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            high: default_high_keywords(),
            medium: default_medium_keywords(),
            low: default_low_keywords(),
        }
    }
}

impl KeywordsConfig {
    pub fn tier(&self, tier: KeywordTier) -> &[String] {
        match tier {
            KeywordTier::High => &self.high,
            KeywordTier::Medium => &self.medium,
            KeywordTier::Low => &self.low,
        }
    }
}

/// Score contributions per rule hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsConfig {
    /// Added per matched high-tier keyword
    #[serde(default = "default_high_weight")]
    pub high: u32,

    /// Added per matched medium-tier keyword
    #[serde(default = "default_medium_weight")]
    pub medium: u32,

    /// Added per matched low-tier keyword
    #[serde(default = "default_low_weight")]
    pub low: u32,

    /// Flat bonus once the distinct keyword count reaches the threshold
    #[serde(default = "default_multi_keyword_bonus")]
    pub multi_keyword_bonus: u32,

    /// Added once per content pattern that matches, however many times
    #[serde(default = "default_pattern_weight")]
    pub pattern: u32,

    /// Added per formatting-anomaly match (count-weighted)
    #[serde(default = "default_formatting_weight")]
    pub formatting: u32,

    /// Added when a short message carries keyword hits
    #[serde(default = "default_short_message_weight")]
    pub short_message: u32,

    /// Added when the URL count exceeds its threshold
    #[serde(default = "default_many_urls_weight")]
    pub many_urls: u32,

    /// Added when any phone number appears
    #[serde(default = "default_phone_number_weight")]
    pub phone_number: u32,

    /// Added when the email count exceeds its threshold
    #[serde(default = "default_many_emails_weight")]
    pub many_emails: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            high: default_high_weight(),
            medium: default_medium_weight(),
            low: default_low_weight(),
            multi_keyword_bonus: default_multi_keyword_bonus(),
            pattern: default_pattern_weight(),
            formatting: default_formatting_weight(),
            short_message: default_short_message_weight(),
            many_urls: default_many_urls_weight(),
            phone_number: default_phone_number_weight(),
            many_emails: default_many_emails_weight(),
        }
    }
}

impl WeightsConfig {
    pub fn tier_weight(&self, tier: KeywordTier) -> u32 {
        match tier {
            KeywordTier::High => self.high,
            KeywordTier::Medium => self.medium,
            KeywordTier::Low => self.low,
        }
    }
}

/// Decision and heuristic cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Confidence at or above this is classified as spam (1-100)
    #[serde(default = "default_spam_threshold")]
    pub spam: u32,

    /// Distinct keyword hits needed for the multi-keyword bonus
    #[serde(default = "default_multi_keyword_count")]
    pub multi_keyword_count: usize,

    /// Messages shorter than this many bytes are "short"
    #[serde(default = "default_short_message_len")]
    pub short_message_len: usize,

    /// Flag when strictly more than this many URLs appear
    #[serde(default = "default_url_count")]
    pub url_count: usize,

    /// Flag when strictly more than this many email addresses appear
    #[serde(default = "default_email_count")]
    pub email_count: usize,

    /// Inputs longer than this many bytes are rejected before scoring
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            spam: default_spam_threshold(),
            multi_keyword_count: default_multi_keyword_count(),
            short_message_len: default_short_message_len(),
            url_count: default_url_count(),
            email_count: default_email_count(),
            max_input_len: default_max_input_len(),
        }
    }
}

/// One content pattern: a regex plus the reason it reports when it fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRuleConfig {
    pub pattern: String,
    pub reason: PatternKind,
}

/// One formatting-anomaly pattern; scoring is per non-overlapping match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingRuleConfig {
    pub pattern: String,
    pub reason: FormattingKind,
}

/// Patterns backing the structural heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureConfig {
    #[serde(default = "default_url_pattern")]
    pub url_pattern: String,

    #[serde(default = "default_phone_pattern")]
    pub phone_pattern: String,

    #[serde(default = "default_email_pattern")]
    pub email_pattern: String,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            url_pattern: default_url_pattern(),
            phone_pattern: default_phone_pattern(),
            email_pattern: default_email_pattern(),
        }
    }
}

pub(crate) const HIGH_KEYWORDS: &[&str] = &[
    "winner",
    "congratulations",
    "lottery",
    "prize",
    "jackpot",
    "million",
    "billion",
    "inheritance",
    "beneficiary",
    "urgent",
    "immediately",
    "act now",
    "limited time",
    "expires today",
    "click here",
    "click now",
    "free money",
    "easy money",
    "guaranteed",
    "risk free",
    "no risk",
    "investment opportunity",
    "make money fast",
    "work from home",
    "earn extra income",
    "debt free",
    "credit repair",
    "loan approved",
    "pre-approved",
    "viagra",
    "pharmacy",
    "prescription",
    "weight loss",
    "lose weight",
    "diet pills",
    "miracle cure",
];

pub(crate) const MEDIUM_KEYWORDS: &[&str] = &[
    "free",
    "offer",
    "deal",
    "discount",
    "save",
    "cheap",
    "affordable",
    "promotion",
    "special",
    "limited",
    "exclusive",
    "bonus",
    "gift",
    "reward",
    "cash",
    "money",
    "income",
    "profit",
    "earn",
    "win",
    "opportunity",
    "business",
    "investment",
    "loan",
    "credit",
    "mortgage",
    "insurance",
    "claim",
];

pub(crate) const LOW_KEYWORDS: &[&str] = &[
    "buy",
    "purchase",
    "order",
    "subscribe",
    "register",
    "sign up",
    "join",
    "membership",
    "account",
    "service",
    "product",
    "company",
    "website",
    "online",
    "internet",
    "email",
    "message",
    "notification",
    "alert",
    "update",
];

fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn default_high_keywords() -> Vec<String> {
    to_owned_list(HIGH_KEYWORDS)
}

pub fn default_medium_keywords() -> Vec<String> {
    to_owned_list(MEDIUM_KEYWORDS)
}

pub fn default_low_keywords() -> Vec<String> {
    to_owned_list(LOW_KEYWORDS)
}

pub fn default_high_weight() -> u32 {
    25
}

pub fn default_medium_weight() -> u32 {
    10
}

pub fn default_low_weight() -> u32 {
    3
}

pub fn default_multi_keyword_bonus() -> u32 {
    15
}

pub fn default_pattern_weight() -> u32 {
    20
}

pub fn default_formatting_weight() -> u32 {
    5
}

pub fn default_short_message_weight() -> u32 {
    10
}

pub fn default_many_urls_weight() -> u32 {
    15
}

pub fn default_phone_number_weight() -> u32 {
    8
}

pub fn default_many_emails_weight() -> u32 {
    10
}

pub fn default_spam_threshold() -> u32 {
    60
}

pub fn default_multi_keyword_count() -> usize {
    3
}

pub fn default_short_message_len() -> usize {
    50
}

pub fn default_url_count() -> usize {
    2
}

pub fn default_email_count() -> usize {
    1
}

pub fn default_max_input_len() -> usize {
    100_000
}

pub fn default_patterns() -> Vec<PatternRuleConfig> {
    use PatternKind::*;
    let rules: [(&str, PatternKind); 10] = [
        (r"(?i)\b\d+%\s*(off|discount|save)\b", PercentDiscount),
        (r"(?i)\$\d+(\.\d{2})?\s*(free|bonus|gift)", MoneyOffer),
        (
            r"(?i)call\s*now\s*\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
            CallNowNumber,
        ),
        (r"(?i)click\s*(here|now|this|link)", ClickRequest),
        (r"(?i)act\s*now\s*(!|\.){0,3}", UrgentAction),
        (r"(?i)limited\s*time\s*(offer|deal)", LimitedTimeOffer),
        (
            r"(?i)\b(urgent|immediate|asap)\b.*\b(action|response|reply)\b",
            UrgentResponse,
        ),
        (
            r"(?i)\b(congratulations?|congrats)\b.*\b(won|winner|selected)\b",
            WinnerAnnouncement,
        ),
        (
            r"(?i)\b(free|no\s*cost).*\b(trial|sample|gift|bonus)\b",
            FreeOffer,
        ),
        (r"(?i)\bmillion\s*(dollar|pound|euro)s?\b", LargeMoneyAmount),
    ];
    rules
        .iter()
        .map(|(pattern, reason)| PatternRuleConfig {
            pattern: (*pattern).to_string(),
            reason: *reason,
        })
        .collect()
}

pub fn default_formatting() -> Vec<FormattingRuleConfig> {
    use FormattingKind::*;
    let rules: [(&str, FormattingKind); 5] = [
        (r"[A-Z]{5,}", ExcessiveCaps),
        (r"!{3,}", RepeatedExclamation),
        (r"\${2,}", RepeatedDollarSigns),
        (r"\*{2,}", RepeatedAsterisks),
        (r"#{2,}", RepeatedHashes),
    ];
    rules
        .iter()
        .map(|(pattern, reason)| FormattingRuleConfig {
            pattern: (*pattern).to_string(),
            reason: *reason,
        })
        .collect()
}

pub fn default_url_pattern() -> String {
    r"(?i)https?://[^\s]+".to_string()
}

pub fn default_phone_pattern() -> String {
    r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b".to_string()
}

pub fn default_email_pattern() -> String {
    r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b".to_string()
}
