//! Topic messaging.
//!
//! The broker transport is consumed as a single send operation behind
//! [`TopicSender`]; everything else about the broker stays outside the
//! application core.

mod errors;
mod sender;

pub use errors::SendError;
pub use sender::{AmqpTopicSender, MockTopicSender, TopicSender};
