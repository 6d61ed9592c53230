use crate::model::Rule;

/// Trims and case-folds visitor input. Blank input yields `None`.
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

pub fn normalize_keywords(rules: &mut [Rule]) {
    for rule in rules.iter_mut() {
        normalize_rule(rule);
    }
}

fn normalize_rule(rule: &mut Rule) {
    rule.id = rule.id.trim().to_string();
    for keyword in rule.keywords.iter_mut() {
        *keyword = keyword.trim().to_lowercase();
    }
}
