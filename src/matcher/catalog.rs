// Rule catalog: ordered keyword rules plus the fallback reply
use crate::model::{CatalogError, ResponseTemplate, Rule};
use crate::normalizer::normalize_keywords;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../../catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    rules: Vec<Rule>,
    fallback: ResponseTemplate,
}

/// Ordered rule table. Declaration order is match priority.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
    fallback: ResponseTemplate,
}

impl RuleCatalog {
    /// Builds a catalog, normalizing keywords and rejecting rules that
    /// could never match or would match everything.
    pub fn new(mut rules: Vec<Rule>, fallback: ResponseTemplate) -> Result<Self, CatalogError> {
        normalize_keywords(&mut rules);

        let mut seen = HashSet::new();
        for rule in &rules {
            if rule.id.is_empty() {
                return Err(CatalogError::BlankId);
            }
            if rule.keywords.is_empty() {
                return Err(CatalogError::NoKeywords(rule.id.clone()));
            }
            if rule.keywords.iter().any(|k| k.is_empty()) {
                return Err(CatalogError::BlankKeyword(rule.id.clone()));
            }
            if !seen.insert(rule.id.clone()) {
                return Err(CatalogError::DuplicateRule(rule.id.clone()));
            }
        }

        Ok(Self { rules, fallback })
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.rules, file.fallback)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &ResponseTemplate {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

pub fn load_catalog(path: &str) -> Result<RuleCatalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_string(),
        source,
    })?;
    let catalog = RuleCatalog::from_json(&content)?;
    info!("Loaded {} rules from {}", catalog.len(), path);
    Ok(catalog)
}
