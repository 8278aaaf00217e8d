//! Promotions service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::promotions::records::PromotionId;

#[derive(Debug, Error)]
pub enum PromotionsServiceError {
    /// The change request failed structural validation.
    #[error("{0}")]
    Validation(String),

    #[error("no promotion with id {0}")]
    NotFound(PromotionId),

    #[error("promotion end date precedes its start date")]
    InvalidPeriod,

    #[error("discount percentage must be between 0 and 100")]
    InvalidDiscount,

    #[error("promotion already exists")]
    AlreadyExists,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PromotionsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
