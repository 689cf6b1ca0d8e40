//! Messages between the session tasks
//!
//! The input task only produces messages; every piece of cooking state
//! is owned by the cook loop draining the channel.

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::input::{Command, CommandError};

/// Channel capacity for parsed input lines
const SESSION_CHANNEL_SIZE: usize = 8;

/// Everything the cook loop receives from the input task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A command line was entered
    Input(Command),
    /// A line could not be parsed
    Rejected(CommandError),
    /// Standard input reached end of file
    InputClosed,
}

/// Create the session channel
pub fn session_channel() -> (Sender<Message>, Receiver<Message>) {
    mpsc::channel(SESSION_CHANNEL_SIZE)
}
