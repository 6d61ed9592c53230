// chat/sender.rs

use crate::model::{DeliveryError, ResponseTemplate};
use std::io::Write;
use tracing::info;

/// Render target for assistant output.
#[async_trait::async_trait]
pub trait ReplySink: Send + Sync {
    async fn deliver(&self, assistant: &str, reply: &ResponseTemplate) -> Result<(), DeliveryError>;
    async fn notice(&self, text: &str) -> Result<(), DeliveryError>;
}

/// Markup form of a reply, as the website widget inserts it. Templates are
/// trusted content and are not escaped.
pub fn render_markup(reply: &ResponseTemplate) -> String {
    format!(
        "<strong>{}</strong><br>{}<br><a href=\"{}\">{}</a>",
        reply.title, reply.description, reply.link.path, reply.link.label
    )
}

pub fn render_plain(reply: &ResponseTemplate) -> String {
    format!(
        "{}\n{}\n→ {} ({})",
        reply.title, reply.description, reply.link.label, reply.link.path
    )
}

/// Prints replies to stdout.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn write(&self, text: &str) -> Result<(), DeliveryError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReplySink for ConsoleSink {
    async fn deliver(&self, assistant: &str, reply: &ResponseTemplate) -> Result<(), DeliveryError> {
        info!("Delivering reply: {}", reply.title);
        self.write(&format!("[{}] {}\n", assistant, render_plain(reply)))
    }

    async fn notice(&self, text: &str) -> Result<(), DeliveryError> {
        self.write(text)
    }
}
