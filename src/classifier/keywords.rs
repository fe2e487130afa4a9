use super::CompiledRules;
use crate::core::{KeywordTier, PassScore, Reason};

/// Score tiered keyword hits against lowercased text.
///
/// Matching is substring containment in declaration order, so the "first
/// three" keywords a reason reports are stable for a given rule set. Each
/// hit adds its tier weight; reaching the distinct-hit threshold adds a
/// flat bonus on top.
pub(crate) fn score_keywords(rules: &CompiledRules, normalized: &str) -> PassScore {
    let mut score: u32 = 0;
    let mut found: Vec<String> = Vec::new();

    for tier in KeywordTier::ALL {
        let weight = rules.config.weights.tier_weight(tier);
        for keyword in rules.config.keywords.tier(tier) {
            if normalized.contains(keyword.as_str()) {
                score += weight;
                found.push(keyword.clone());
            }
        }
    }

    let mut reasons = Vec::new();
    if !found.is_empty() {
        let count = found.len();
        reasons.push(Reason::Keywords { found });
        if count >= rules.config.thresholds.multi_keyword_count {
            score += rules.config.weights.multi_keyword_bonus;
            reasons.push(Reason::ManyKeywords { count });
        }
    }

    PassScore::new(score, reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::CompiledRules;
    use crate::config::RulesConfig;

    fn stock_rules() -> CompiledRules {
        CompiledRules::compile(RulesConfig::default()).unwrap()
    }

    #[test]
    fn test_no_keywords_scores_zero() {
        let rules = stock_rules();
        let pass = score_keywords(&rules, "hello there, see you at noon");
        assert_eq!(pass.score, 0);
        assert!(pass.reasons.is_empty());
    }

    #[test]
    fn test_single_high_keyword() {
        let rules = stock_rules();
        let pass = score_keywords(&rules, "you are the lottery pick of the day");
        assert_eq!(pass.score, 25);
        assert_eq!(
            pass.reasons,
            vec![Reason::Keywords {
                found: vec!["lottery".to_string()]
            }]
        );
    }

    #[test]
    fn test_tier_weights_accumulate() {
        let rules = stock_rules();
        // "jackpot" high (25), "cash" medium (10), "purchase" low (3)
        let pass = score_keywords(&rules, "jackpot cash purchase");
        assert_eq!(pass.score, 25 + 10 + 3 + 15);
    }

    #[test]
    fn test_multi_keyword_bonus_at_three() {
        let rules = stock_rules();
        // exactly three distinct hits: "jackpot", "cash", "mortgage"
        let pass = score_keywords(&rules, "jackpot cash mortgage");
        assert_eq!(pass.score, 25 + 10 + 10 + 15);
        assert_eq!(pass.reasons.len(), 2);
        assert_eq!(pass.reasons[1], Reason::ManyKeywords { count: 3 });
    }

    #[test]
    fn test_two_keywords_no_bonus() {
        let rules = stock_rules();
        let pass = score_keywords(&rules, "jackpot mortgage");
        assert_eq!(pass.score, 25 + 10);
        assert_eq!(pass.reasons.len(), 1);
    }

    #[test]
    fn test_found_order_follows_tier_then_declaration() {
        let rules = stock_rules();
        // "cash" is medium, "winner" and "prize" are high; high tier reports
        // first, in list order (winner precedes prize).
        let pass = score_keywords(&rules, "cash prize for the winner");
        match &pass.reasons[0] {
            Reason::Keywords { found } => {
                let winner_pos = found.iter().position(|k| k == "winner").unwrap();
                let prize_pos = found.iter().position(|k| k == "prize").unwrap();
                let cash_pos = found.iter().position(|k| k == "cash").unwrap();
                assert!(winner_pos < prize_pos);
                assert!(prize_pos < cash_pos);
            }
            other => panic!("expected keyword reason, got {other:?}"),
        }
    }

    #[test]
    fn test_containment_catches_embedded_keywords() {
        let rules = stock_rules();
        // "win" (medium) is contained in "winner" (high): both count.
        let pass = score_keywords(&rules, "winner");
        assert_eq!(pass.score, 25 + 10);
    }
}
