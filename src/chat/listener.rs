// chat/listener.rs

use crate::chat::command_handler::{handle_command, is_command, CommandOutcome};
use crate::chat::ChatSession;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Reads visitor input line by line until EOF or `/quit`, then waits for
/// outstanding replies.
pub async fn listen<R>(reader: R, session: &mut ChatSession)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if is_command(&line) {
                    if handle_command(&line, session).await == CommandOutcome::Quit {
                        break;
                    }
                    continue;
                }
                session.submit(&line).await;
            }
            Ok(None) => {
                info!("Input closed.");
                break;
            }
            Err(e) => {
                warn!("Input read error: {:?}", e);
                break;
            }
        }
    }
    session.flush().await;
}

pub async fn listen_stdin(session: &mut ChatSession) {
    listen(BufReader::new(tokio::io::stdin()), session).await;
}
