//! Content pattern pass: presence signals, scored once per pattern.

use super::CompiledRules;
use crate::core::{PassScore, Reason};

/// A pattern that matches anywhere in the original text contributes a flat
/// weight, however many times it occurs. Intensity belongs to the
/// formatting pass; these are presence signals.
pub(crate) fn score_patterns(rules: &CompiledRules, text: &str) -> PassScore {
    let mut score: u32 = 0;
    let mut reasons = Vec::new();

    for (regex, kind) in &rules.patterns {
        if regex.is_match(text) {
            score += rules.config.weights.pattern;
            reasons.push(Reason::Pattern { pattern: *kind });
        }
    }

    PassScore::new(score, reasons)
}
