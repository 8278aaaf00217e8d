//! Topic senders.

use async_trait::async_trait;
use lapin::{
    BasicProperties, Connection, ConnectionProperties,
    options::{BasicPublishOptions, QueueDeclareOptions},
    types::FieldTable,
};
use mockall::automock;
use tracing::debug;

use crate::messaging::errors::SendError;

/// Transport contract: deliver one message body to a named topic.
#[automock]
#[async_trait]
pub trait TopicSender: Send + Sync {
    /// Send `body` as the entire content of a single message.
    async fn send(&self, topic: &str, body: &str) -> Result<(), SendError>;
}

/// AMQP-backed sender.
///
/// Holds one long-lived connection; each send opens its own channel,
/// which is released when it drops, on every exit path.
#[derive(Debug)]
pub struct AmqpTopicSender {
    connection: Connection,
}

impl AmqpTopicSender {
    /// Connect to the broker.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection cannot be established.
    pub async fn connect(url: &str) -> Result<Self, lapin::Error> {
        let connection = Connection::connect(
            url,
            ConnectionProperties::default().with_connection_name("arcade".into()),
        )
        .await?;

        Ok(Self { connection })
    }

    /// Declare the topic's durable queue so sends have a destination.
    ///
    /// # Errors
    ///
    /// Returns an error when the broker refuses the declaration.
    pub async fn ensure_topic(&self, topic: &str) -> Result<(), lapin::Error> {
        let channel = self.connection.create_channel().await?;

        channel
            .queue_declare(
                topic,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await?;

        Ok(())
    }
}

#[async_trait]
impl TopicSender for AmqpTopicSender {
    async fn send(&self, topic: &str, body: &str) -> Result<(), SendError> {
        let channel = self
            .connection
            .create_channel()
            .await
            .map_err(SendError::Channel)?;

        let confirm = channel
            .basic_publish(
                "",
                topic,
                BasicPublishOptions::default(),
                body.as_bytes(),
                BasicProperties::default()
                    .with_delivery_mode(2)
                    .with_content_type("application/json".into()),
            )
            .await
            .map_err(|source| SendError::Publish {
                topic: topic.to_string(),
                source,
            })?;

        confirm.await.map_err(|source| SendError::Publish {
            topic: topic.to_string(),
            source,
        })?;

        debug!(topic, "published message");

        Ok(())
    }
}
