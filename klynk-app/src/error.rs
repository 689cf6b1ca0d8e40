//! Application errors

use std::path::PathBuf;

use klynk_core::config::ConfigError;
use klynk_core::sequencer::SequencerError;
use klynk_protocol::SourceError;
use thiserror::Error;

/// Errors surfaced by the terminal client
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    ConfigInvalid(ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("cannot start cooking: {0}")]
    Sequencer(SequencerError),

    #[error("terminal output failed: {0}")]
    Terminal(#[from] std::io::Error),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::ConfigInvalid(e)
    }
}

impl From<SequencerError> for AppError {
    fn from(e: SequencerError) -> Self {
        AppError::Sequencer(e)
    }
}
