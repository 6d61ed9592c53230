// chat/command_handler.rs

use crate::chat::ChatSession;
use crate::utils::format_clock;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

pub fn is_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}

/// Handles a slash command typed into the chat.
pub async fn handle_command(command_text: &str, session: &ChatSession) -> CommandOutcome {
    info!("Handling command: {}", command_text);
    let message = match command_text.trim() {
        "/help" => "Available commands:\n\
            /help — command list\n\
            /topics — what I can recommend\n\
            /history — conversation so far\n\
            /quit — leave the chat\n\
            Anything else is a question for me."
            .to_string(),
        "/topics" => {
            let catalog = session.matcher().catalog();
            if catalog.is_empty() {
                "No topics configured.".to_string()
            } else {
                let mut msg = String::from("Topics, in priority order:\n");
                for (i, rule) in catalog.rules().iter().enumerate() {
                    msg.push_str(&format!("{}. {} [{}]\n", i + 1, rule.id, rule.keywords.join(", ")));
                }
                msg
            }
        }
        "/history" => {
            let transcript = session.transcript();
            let transcript = transcript.lock().await;
            if transcript.is_empty() {
                "No messages yet.".to_string()
            } else {
                let mut msg = String::new();
                for entry in transcript.entries() {
                    msg.push_str(&format!("{} {}: {}\n", format_clock(&entry.at), entry.role.label(), entry.text));
                }
                msg
            }
        }
        "/quit" => {
            if let Err(e) = session.sink().notice("Goodbye!").await {
                warn!("/quit notice error: {:?}", e);
            }
            return CommandOutcome::Quit;
        }
        _ => "Unknown command. Type /help for a list of commands.".to_string(),
    };

    if let Err(e) = session.sink().notice(&message).await {
        warn!("{} notice error: {:?}", command_text, e);
    }
    CommandOutcome::Continue
}
