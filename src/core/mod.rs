use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight class assigned to a keyword group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordTier {
    High,
    Medium,
    Low,
}

impl KeywordTier {
    /// Tiers in scoring order. Iteration order is load-bearing: it decides
    /// which keywords are reported first when more than three match.
    pub const ALL: [KeywordTier; 3] = [KeywordTier::High, KeywordTier::Medium, KeywordTier::Low];
}

/// Content pattern identifiers, in rule-table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    PercentDiscount,
    MoneyOffer,
    CallNowNumber,
    ClickRequest,
    UrgentAction,
    LimitedTimeOffer,
    UrgentResponse,
    WinnerAnnouncement,
    FreeOffer,
    LargeMoneyAmount,
}

/// Formatting anomaly identifiers, in rule-table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormattingKind {
    ExcessiveCaps,
    RepeatedExclamation,
    RepeatedDollarSigns,
    RepeatedAsterisks,
    RepeatedHashes,
}

/// Why a pass contributed to the score.
///
/// Reasons are structured records; rendering to user-facing text happens in
/// the `Display` impl so hosts can match on kinds instead of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    /// One or more keywords matched; `found` holds every hit in tier order.
    Keywords { found: Vec<String> },
    /// Three or more distinct keywords matched across all tiers.
    ManyKeywords { count: usize },
    Pattern { pattern: PatternKind },
    Formatting { anomaly: FormattingKind },
    ShortWithIndicators,
    ManyUrls,
    PhoneNumber,
    ManyEmails,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Keywords { found } => {
                let listed: Vec<&str> = found.iter().take(3).map(String::as_str).collect();
                write!(f, "Contains spam keywords: {}", listed.join(", "))
            }
            Reason::ManyKeywords { count } => {
                write!(f, "Multiple spam keywords detected ({count})")
            }
            Reason::Pattern { pattern } => {
                let text = match pattern {
                    PatternKind::PercentDiscount => "Contains percentage discount pattern",
                    PatternKind::MoneyOffer => "Contains money offer pattern",
                    PatternKind::CallNowNumber => "Contains phone number with call-to-action",
                    PatternKind::ClickRequest => "Contains suspicious click request",
                    PatternKind::UrgentAction => "Contains urgent action request",
                    PatternKind::LimitedTimeOffer => "Contains limited time offer",
                    PatternKind::UrgentResponse => "Contains urgent response request",
                    PatternKind::WinnerAnnouncement => "Contains winner/congratulations pattern",
                    PatternKind::FreeOffer => "Contains free offer pattern",
                    PatternKind::LargeMoneyAmount => "Contains large money amount",
                };
                f.write_str(text)
            }
            Reason::Formatting { anomaly } => {
                let text = match anomaly {
                    FormattingKind::ExcessiveCaps => "Excessive use of capital letters",
                    FormattingKind::RepeatedExclamation => "Multiple exclamation marks",
                    FormattingKind::RepeatedDollarSigns => "Multiple dollar signs",
                    FormattingKind::RepeatedAsterisks => "Excessive asterisks or emphasis",
                    FormattingKind::RepeatedHashes => "Multiple hash symbols",
                };
                f.write_str(text)
            }
            Reason::ShortWithIndicators => f.write_str("Short message with spam indicators"),
            Reason::ManyUrls => f.write_str("Contains multiple URLs"),
            Reason::PhoneNumber => f.write_str("Contains phone number"),
            Reason::ManyEmails => f.write_str("Contains multiple email addresses"),
        }
    }
}

/// Sub-score produced by one scoring pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassScore {
    pub score: u32,
    pub reasons: Vec<Reason>,
}

impl PassScore {
    pub fn new(score: u32, reasons: Vec<Reason>) -> Self {
        Self { score, reasons }
    }
}

/// Result of classifying a single message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub is_spam: bool,
    /// Clamped 0-100 percentage derived from the total score.
    pub confidence: u32,
    /// At most five reasons, in pass order.
    pub reasons: Vec<Reason>,
    /// Unclamped total score across all passes.
    pub score: u32,
}

impl Classification {
    /// Zero result for empty or whitespace-only input.
    pub fn clean() -> Self {
        Self {
            is_spam: false,
            confidence: 0,
            reasons: Vec::new(),
            score: 0,
        }
    }
}
