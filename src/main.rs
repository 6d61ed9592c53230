mod chat;
mod config;
mod matcher;
mod model;
mod normalizer;
mod utils;

use chat::listener::listen_stdin;
use chat::sender::ConsoleSink;
use chat::ChatSession;
use config::load_config;
use matcher::{load_catalog, KeywordMatcher, RuleCatalog};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries the conversation
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let catalog = match config.catalog_path.as_deref() {
        Some(path) => load_catalog(path),
        None => RuleCatalog::builtin(),
    };
    let catalog = match catalog {
        Ok(c) => c,
        Err(e) => {
            error!("Catalog load error: {}", e);
            return;
        }
    };
    info!("Rule catalog ready: {} rules", catalog.len());

    let matcher = Arc::new(KeywordMatcher::new(catalog));
    let mut session = ChatSession::new(matcher, Arc::new(ConsoleSink::new()), &config);

    println!(
        "{} here. Ask me about tours, or type /help.",
        session.assistant_name
    );
    listen_stdin(&mut session).await;
    info!("Session ended.");
}
