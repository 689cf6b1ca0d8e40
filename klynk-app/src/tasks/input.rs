//! Input task
//!
//! Reads lines from an async reader (stdin in the binary), parses them
//! into commands and forwards them to the cook loop.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::channels::Message;
use crate::input::{Command, CommandError};

/// Spawn the input task
///
/// Blank lines are skipped. End of input sends [`Message::InputClosed`].
pub fn spawn_input<R>(reader: R, tx: Sender<Message>) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = reader.lines();

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "failed to read input");
                    break;
                }
            };

            let message = match Command::parse(&line) {
                Ok(command) => Message::Input(command),
                Err(CommandError::Empty) => continue,
                Err(e) => Message::Rejected(e),
            };

            if tx.send(message).await.is_err() {
                return;
            }
        }

        debug!("input closed");
        let _ = tx.send(Message::InputClosed).await;
    })
}
