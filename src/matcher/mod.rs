// Matcher module: rule catalog and the keyword evaluator.

pub mod catalog;
pub mod keyword_matcher;

pub use catalog::{load_catalog, RuleCatalog};
pub use keyword_matcher::{KeywordMatcher, ResponseMatcher};
