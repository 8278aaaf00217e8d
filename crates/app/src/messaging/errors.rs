//! Messaging errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    /// The per-send channel could not be opened.
    #[error("failed to open a channel to the broker")]
    Channel(#[source] lapin::Error),

    /// The broker refused or never acknowledged the message.
    #[error("failed to publish to topic \"{topic}\"")]
    Publish {
        topic: String,
        #[source]
        source: lapin::Error,
    },
}
