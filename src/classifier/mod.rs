//! Rule-based spam scoring engine.
//!
//! Four independent passes (keywords, content patterns, formatting
//! anomalies, structural heuristics) each produce a sub-score and reasons;
//! the sums are clamped into a 0-100 confidence and compared against the
//! spam threshold. Passes share one immutable compiled rule set, so a
//! `Classifier` is freely shareable across threads.

mod formatting;
mod keywords;
mod patterns;
mod structure;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RulesConfig;
use crate::core::{Classification, FormattingKind, PatternKind};
use crate::error::{ClassifyError, ConfigError};

/// Reasons reported to the caller are capped at five, however many rules fire.
const MAX_REASONS: usize = 5;

static DEFAULT_RULES: Lazy<CompiledRules> =
    Lazy::new(|| CompiledRules::compile(RulesConfig::default()).expect("stock rule set compiles"));

/// Rule set with every regex compiled once at construction.
#[derive(Clone, Debug)]
pub(crate) struct CompiledRules {
    pub(crate) config: RulesConfig,
    pub(crate) patterns: Vec<(Regex, PatternKind)>,
    pub(crate) formatting: Vec<(Regex, FormattingKind)>,
    pub(crate) url: Regex,
    pub(crate) phone: Regex,
    pub(crate) email: Regex,
}

impl CompiledRules {
    fn compile(mut config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        // Keyword matching is containment against lowercased input, so the
        // lists must be lowercase no matter what the config file said.
        for list in [
            &mut config.keywords.high,
            &mut config.keywords.medium,
            &mut config.keywords.low,
        ] {
            for keyword in list.iter_mut() {
                *keyword = keyword.to_lowercase();
            }
        }

        let patterns = config
            .patterns
            .iter()
            .map(|rule| compile_pattern(&rule.pattern).map(|re| (re, rule.reason)))
            .collect::<Result<Vec<_>, _>>()?;
        let formatting = config
            .formatting
            .iter()
            .map(|rule| compile_pattern(&rule.pattern).map(|re| (re, rule.reason)))
            .collect::<Result<Vec<_>, _>>()?;
        let url = compile_pattern(&config.structure.url_pattern)?;
        let phone = compile_pattern(&config.structure.phone_pattern)?;
        let email = compile_pattern(&config.structure.email_pattern)?;

        Ok(Self {
            config,
            patterns,
            formatting,
            url,
            phone,
            email,
        })
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Deterministic spam classifier over an immutable rule set.
pub struct Classifier {
    rules: CompiledRules,
}

impl Classifier {
    /// Classifier with the stock rule set.
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }

    /// Classifier with a host-supplied rule set. Malformed patterns or
    /// unusable thresholds fail here, not at call time.
    pub fn from_config(config: RulesConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            rules: CompiledRules::compile(config)?,
        })
    }

    /// The effective rule set, for hosts that want to inspect or log it.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules.config
    }

    /// Score a single message.
    ///
    /// Empty or whitespace-only input is a normal outcome and returns the
    /// zero result. The keyword pass sees a lowercased/trimmed copy; the
    /// other passes see the original text, because letter case and
    /// punctuation repetition are exactly what they look for.
    pub fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        let max = self.rules.config.thresholds.max_input_len;
        if text.len() > max {
            return Err(ClassifyError::InputTooLarge {
                len: text.len(),
                max,
            });
        }
        if text.trim().is_empty() {
            return Ok(Classification::clean());
        }

        let normalized = text.trim().to_lowercase();

        let mut score: u32 = 0;
        let mut reasons = Vec::new();
        for pass in [
            keywords::score_keywords(&self.rules, &normalized),
            patterns::score_patterns(&self.rules, text),
            formatting::score_formatting(&self.rules, text),
            structure::score_structure(&self.rules, text),
        ] {
            score += pass.score;
            reasons.extend(pass.reasons);
        }
        reasons.truncate(MAX_REASONS);

        let confidence = score.min(100);
        let is_spam = confidence >= self.rules.config.thresholds.spam;

        Ok(Classification {
            is_spam,
            confidence,
            reasons,
            score,
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
