//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::{
        games::{
            publisher::GameChangePublisher,
            repository::PgGamesRepository,
            service::{GamesService, PgGamesService},
        },
        promotions::{
            repository::PgPromotionsRepository,
            service::{PgPromotionsService, PromotionsService},
        },
    },
    messaging::AmqpTopicSender,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to connect to message broker")]
    Messaging(#[source] lapin::Error),
}

/// Messaging settings consumed at startup.
#[derive(Debug, Clone)]
pub struct MessagingSettings {
    /// Broker connection string.
    pub amqp_url: String,
    /// Topic receiving game change documents.
    pub topic_name: String,
}

#[derive(Clone)]
pub struct AppContext {
    pub games: Arc<dyn GamesService>,
    pub promotions: Arc<dyn PromotionsService>,
}

impl AppContext {
    /// Build application context from a database URL and messaging
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the database or broker connection fails.
    pub async fn from_config(
        database_url: &str,
        messaging: MessagingSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url)
            .await
            .map_err(AppInitError::Database)?;

        let sender = AmqpTopicSender::connect(&messaging.amqp_url)
            .await
            .map_err(AppInitError::Messaging)?;

        sender
            .ensure_topic(&messaging.topic_name)
            .await
            .map_err(AppInitError::Messaging)?;

        let publisher = GameChangePublisher::new(Arc::new(sender), messaging.topic_name);

        Ok(Self {
            games: Arc::new(PgGamesService::new(
                Arc::new(PgGamesRepository::new(pool.clone())),
                publisher,
            )),
            promotions: Arc::new(PgPromotionsService::new(Arc::new(
                PgPromotionsRepository::new(pool),
            ))),
        })
    }
}
