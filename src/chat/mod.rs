pub mod command_handler;
pub mod listener;
pub mod sender;
pub mod transcript;

use crate::config::{AppConfig, ReplyDelayConfig};
use crate::matcher::{KeywordMatcher, ResponseMatcher};
use crate::model::Role;
use crate::utils::typing_delay;
use futures::future::join_all;
use sender::{render_markup, ReplySink};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use transcript::Transcript;

/// One visitor conversation: matches input and schedules delayed replies.
pub struct ChatSession {
    pub assistant_name: String,
    matcher: Arc<KeywordMatcher>,
    transcript: Arc<Mutex<Transcript>>,
    sink: Arc<dyn ReplySink>,
    delay: ReplyDelayConfig,
    pending: Vec<JoinHandle<()>>,
}

impl ChatSession {
    pub fn new(matcher: Arc<KeywordMatcher>, sink: Arc<dyn ReplySink>, config: &AppConfig) -> Self {
        Self {
            assistant_name: config.assistant_name.clone(),
            matcher,
            transcript: Arc::new(Mutex::new(Transcript::new())),
            sink,
            delay: config.reply_delay_ms,
            pending: Vec::new(),
        }
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    pub fn sink(&self) -> &Arc<dyn ReplySink> {
        &self.sink
    }

    pub fn transcript(&self) -> Arc<Mutex<Transcript>> {
        Arc::clone(&self.transcript)
    }

    /// Records the visitor message and schedules the reply.
    ///
    /// Returns `false` for blank input, which is ignored. Replies are not
    /// correlated with their question: two quick submissions queue two
    /// independent replies.
    pub async fn submit(&mut self, raw: &str) -> bool {
        let text = raw.trim();
        let Some(found) = self.matcher.respond(text) else {
            debug!("Ignoring blank input");
            return false;
        };
        info!("Matched rule: {}", found.rule_id.unwrap_or("fallback"));
        let reply = found.template.clone();

        self.transcript.lock().await.append(Role::Visitor, text);

        let delay = typing_delay(self.delay);
        let transcript = Arc::clone(&self.transcript);
        let sink = Arc::clone(&self.sink);
        let assistant = self.assistant_name.clone();

        self.pending.retain(|handle| !handle.is_finished());
        self.pending.push(tokio::spawn(async move {
            sleep(delay).await;
            transcript.lock().await.append(Role::Assistant, render_markup(&reply));
            if let Err(e) = sink.deliver(&assistant, &reply).await {
                warn!("Reply delivery failed: {:?}", e);
            }
        }));
        true
    }

    /// Waits for every scheduled reply to land.
    pub async fn flush(&mut self) {
        let handles = std::mem::take(&mut self.pending);
        if handles.is_empty() {
            return;
        }
        info!("Waiting for {} pending replies...", handles.len());
        for result in join_all(handles).await {
            if let Err(e) = result {
                warn!("Reply task failed: {:?}", e);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::session;
    use super::*;

    #[tokio::test]
    async fn test_blank_submission_is_noop() {
        let (mut session, sink) = session();
        assert!(!session.submit("").await);
        assert!(!session.submit("   ").await);
        session.flush().await;

        assert!(session.transcript().lock().await.is_empty());
        assert!(sink.replies.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_each_submission_gets_one_reply() {
        let (mut session, sink) = session();
        assert!(session.submit("  Any beach tours? ").await);
        assert!(session.submit("hello").await);
        session.flush().await;

        let transcript = session.transcript();
        let transcript = transcript.lock().await;
        let visitor: Vec<&str> = transcript
            .entries()
            .iter()
            .filter(|e| e.role == Role::Visitor)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(visitor, vec!["Any beach tours?", "hello"]);

        let assistant: Vec<&str> = transcript
            .entries()
            .iter()
            .filter(|e| e.role == Role::Assistant)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(assistant.len(), 2);
        assert!(assistant.iter().any(|t| t.starts_with("<strong>Albanian Riviera Escape</strong>")));
        assert!(assistant.iter().any(|t| t.starts_with("<strong>Our Tour Categories</strong>")));

        let mut replies = sink.replies.lock().unwrap().clone();
        replies.sort();
        assert_eq!(replies, vec!["Albanian Riviera Escape", "Our Tour Categories"]);
    }

    #[tokio::test]
    async fn test_flush_without_pending_replies() {
        let (mut session, _sink) = session();
        session.flush().await;
        assert!(session.transcript().lock().await.is_empty());
    }
}
