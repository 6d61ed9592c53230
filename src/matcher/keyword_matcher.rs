// Keyword matching over the rule catalog
use crate::matcher::catalog::RuleCatalog;
use crate::model::ResponseTemplate;
use crate::normalizer::normalize_input;

/// Result of matching one visitor message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    /// Id of the winning rule, `None` when the fallback answered.
    pub rule_id: Option<&'a str>,
    pub template: &'a ResponseTemplate,
}

pub trait ResponseMatcher {
    fn respond<'a>(&'a self, input: &str) -> Option<Match<'a>>;
}

/// Evaluates `input` against `catalog` in declaration order.
///
/// Blank input yields `None`. Any other input yields exactly one match:
/// the first rule with a keyword contained in the case-folded input, or the
/// fallback when no rule fires.
pub fn find_response<'a>(input: &str, catalog: &'a RuleCatalog) -> Option<Match<'a>> {
    let normalized = normalize_input(input)?;

    for rule in catalog.rules() {
        if rule.keywords.iter().any(|k| normalized.contains(k.as_str())) {
            return Some(Match {
                rule_id: Some(rule.id.as_str()),
                template: &rule.response,
            });
        }
    }

    Some(Match {
        rule_id: None,
        template: catalog.fallback(),
    })
}

pub struct KeywordMatcher {
    catalog: RuleCatalog,
}

impl KeywordMatcher {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }
}

impl ResponseMatcher for KeywordMatcher {
    fn respond<'a>(&'a self, input: &str) -> Option<Match<'a>> {
        find_response(input, &self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Link, Rule};

    fn builtin() -> KeywordMatcher {
        KeywordMatcher::new(RuleCatalog::builtin().unwrap())
    }

    fn rule_for<'a>(matcher: &'a KeywordMatcher, input: &str) -> Option<&'a str> {
        matcher.respond(input).and_then(|m| m.rule_id)
    }

    #[test]
    fn test_beach_matches_regardless_of_case() {
        let matcher = builtin();
        for input in ["beach", "BEACH", "Beach", "any good BeAcHeS nearby?"] {
            let found = matcher.respond(input).unwrap();
            assert_eq!(found.rule_id, Some("beach"));
            assert_eq!(found.template.title, "Albanian Riviera Escape");
        }
    }

    #[test]
    fn test_unmatched_input_gets_fallback() {
        let matcher = builtin();
        let found = matcher.respond("hello").unwrap();
        assert_eq!(found.rule_id, None);
        assert_eq!(found.template, matcher.catalog().fallback());
    }

    #[test]
    fn test_blank_input_produces_nothing() {
        let matcher = builtin();
        assert!(matcher.respond("").is_none());
        assert!(matcher.respond("   \t ").is_none());
    }

    #[test]
    fn test_every_non_blank_input_gets_one_reply() {
        let matcher = builtin();
        for input in ["hello", "x", "?!", "Do you do castles?", "日本語", "  hike  "] {
            assert!(matcher.respond(input).is_some(), "no reply for {:?}", input);
        }
    }

    #[test]
    fn test_declared_order_breaks_ties() {
        let matcher = builtin();
        // beach is declared before history
        assert_eq!(rule_for(&matcher, "history and beach"), Some("beach"));
        assert_eq!(rule_for(&matcher, "a castle on the coast"), Some("beach"));
        // day-trip is declared before multi-day
        assert_eq!(rule_for(&matcher, "a multi-day package"), Some("day-trip"));
        assert_eq!(rule_for(&matcher, "several weeks"), Some("multi-day"));
    }

    #[test]
    fn test_history_wins_when_declared_first() {
        let template = |title: &str| crate::model::ResponseTemplate {
            title: title.into(),
            description: String::new(),
            link: Link { path: "/".into(), label: "go".into() },
        };
        let catalog = RuleCatalog::new(
            vec![
                Rule { id: "history".into(), keywords: vec!["history".into()], response: template("History") },
                Rule { id: "beach".into(), keywords: vec!["beach".into()], response: template("Beach") },
            ],
            template("Fallback"),
        )
        .unwrap();
        let found = find_response("history and beach", &catalog).unwrap();
        assert_eq!(found.rule_id, Some("history"));
        assert_eq!(found.template.title, "History");
    }

    #[test]
    fn test_substring_not_word_match() {
        let matcher = builtin();
        assert_eq!(rule_for(&matcher, "hiking"), Some("mountain"));
        assert_eq!(rule_for(&matcher, "SWIMMING"), Some("beach"));
        // "today" contains "day"
        assert_eq!(rule_for(&matcher, "anything today?"), Some("day-trip"));
    }

    #[test]
    fn test_each_category_reachable() {
        let matcher = builtin();
        assert_eq!(rule_for(&matcher, "something quick"), Some("day-trip"));
        assert_eq!(rule_for(&matcher, "Riviera"), Some("beach"));
        assert_eq!(rule_for(&matcher, "UNESCO towns"), Some("history"));
        assert_eq!(rule_for(&matcher, "the Alps"), Some("mountain"));
        assert_eq!(rule_for(&matcher, "a full itinerary"), Some("multi-day"));
        assert_eq!(rule_for(&matcher, "private guide"), Some("custom"));
    }

    #[test]
    fn test_same_input_same_output() {
        let matcher = builtin();
        let first = matcher.respond("Mountain hiking please");
        let second = matcher.respond("Mountain hiking please");
        assert_eq!(first, second);
    }
}
