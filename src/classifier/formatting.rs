use super::CompiledRules;
use crate::core::{PassScore, Reason};

/// Formatting anomalies are intensity signals: every non-overlapping match
/// counts, at the per-match weight, with no per-rule cap. Each anomaly
/// still reports a single reason no matter how often it occurs.
pub(crate) fn score_formatting(rules: &CompiledRules, text: &str) -> PassScore {
    let mut score: u32 = 0;
    let mut reasons = Vec::new();

    for (regex, kind) in &rules.formatting {
        let count = regex.find_iter(text).count() as u32;
        if count > 0 {
            score += count * rules.config.weights.formatting;
            reasons.push(Reason::Formatting { anomaly: *kind });
        }
    }

    PassScore::new(score, reasons)
}
