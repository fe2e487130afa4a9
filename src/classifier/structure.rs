use super::{keywords, CompiledRules};
use crate::core::{PassScore, Reason};

/// Structural heuristics over the original text: message length, URL
/// density, phone numbers, email addresses. The checks are independent and
/// every applicable one fires.
pub(crate) fn score_structure(rules: &CompiledRules, text: &str) -> PassScore {
    let mut score: u32 = 0;
    let mut reasons = Vec::new();
    let thresholds = &rules.config.thresholds;

    // Short messages carrying keyword hits are suspicious. This re-runs the
    // keyword pass on a lowercased copy rather than duplicating its logic,
    // so keyword weights keep a single source of truth.
    if text.len() < thresholds.short_message_len
        && keywords::score_keywords(rules, &text.to_lowercase()).score > 0
    {
        score += rules.config.weights.short_message;
        reasons.push(Reason::ShortWithIndicators);
    }

    let url_count = rules.url.find_iter(text).count();
    if url_count > thresholds.url_count {
        score += rules.config.weights.many_urls;
        reasons.push(Reason::ManyUrls);
    }

    let phone_count = rules.phone.find_iter(text).count();
    if phone_count > 0 {
        score += rules.config.weights.phone_number;
        reasons.push(Reason::PhoneNumber);
    }

    let email_count = rules.email.find_iter(text).count();
    if email_count > thresholds.email_count {
        score += rules.config.weights.many_emails;
        reasons.push(Reason::ManyEmails);
    }

    PassScore::new(score, reasons)
}
