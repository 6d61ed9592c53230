// Core structs: Rule, ResponseTemplate, TranscriptEntry
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub path: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseTemplate {
    pub title: String,
    pub description: String,
    pub link: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub id: String,
    pub keywords: Vec<String>,
    pub response: ResponseTemplate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Visitor,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Visitor => "you",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub role: Role,
    pub text: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reply delay min ({min} ms) exceeds max ({max} ms)")]
    InvalidDelay { min: u64, max: u64 },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rule with a blank id")]
    BlankId,
    #[error("rule '{0}' has no keywords")]
    NoKeywords(String),
    #[error("rule '{0}' has a blank keyword")]
    BlankKeyword(String),
    #[error("duplicate rule id '{0}'")]
    DuplicateRule(String),
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),
}
