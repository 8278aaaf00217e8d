//! Server configuration module

use clap::Parser;

use arcade_app::context::MessagingSettings;

/// Arcade JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "arcade-json", about = "Arcade JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "8690")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// AMQP broker connection string
    #[arg(long, env = "AMQP_URL")]
    pub amqp_url: String,

    /// Topic receiving game change documents
    #[arg(long, env = "TOPIC_NAME", default_value = "game-updates")]
    pub topic_name: String,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Messaging settings for the application context
    #[must_use]
    pub fn messaging(&self) -> MessagingSettings {
        MessagingSettings {
            amqp_url: self.amqp_url.clone(),
            topic_name: self.topic_name.clone(),
        }
    }
}
