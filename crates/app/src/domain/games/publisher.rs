//! Game change notifications.
//!
//! After a successful create or update the write path publishes a flat
//! change document to a topic so a downstream read model can converge.
//! Delivery is best-effort: at-most-once, no retry, no dead-letter, no
//! ordering key.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use serde::Serialize;
use thiserror::Error;

use crate::{
    domain::games::records::GameRecord,
    messaging::{SendError, TopicSender},
};

/// The wire document consumed downstream. Field names, casing and order
/// are part of the contract.
#[derive(Debug, Serialize)]
pub struct GameDocument {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Price")]
    pub price: f64,
    /// Genre rendered as its symbolic name, not a numeric value.
    #[serde(rename = "Genre")]
    pub genre: String,
    /// Rating rendered as its symbolic name.
    #[serde(rename = "Rating")]
    pub rating: String,
}

impl From<&GameRecord> for GameDocument {
    fn from(game: &GameRecord) -> Self {
        Self {
            id: game.id.into_i64(),
            name: game.name.clone(),
            company: game.company.clone(),
            price: game.price,
            genre: game.genre.as_str().to_string(),
            rating: game.rating.as_str().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to encode game document")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Send(#[from] SendError),
}

/// Publishes game change documents to the configured topic.
#[derive(Clone)]
pub struct GameChangePublisher {
    sender: Arc<dyn TopicSender>,
    topic: String,
}

impl Debug for GameChangePublisher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GameChangePublisher")
            .field("topic", &self.topic)
            .finish_non_exhaustive()
    }
}

impl GameChangePublisher {
    #[must_use]
    pub fn new(sender: Arc<dyn TopicSender>, topic: impl Into<String>) -> Self {
        Self {
            sender,
            topic: topic.into(),
        }
    }

    /// Serialize a committed game and send it to the topic.
    ///
    /// The outcome is handed back to the caller; deciding whether a
    /// failure is fatal belongs to the write path, not here.
    ///
    /// # Errors
    ///
    /// Returns an error when encoding the document or the send fails.
    pub async fn publish(&self, game: &GameRecord) -> Result<(), PublishError> {
        let body = serde_json::to_string(&GameDocument::from(game))?;

        self.sender.send(&self.topic, &body).await?;

        Ok(())
    }
}
