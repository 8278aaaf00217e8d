//! Promotion Errors

use salvo::http::StatusError;
use tracing::error;

use arcade_app::domain::promotions::PromotionsServiceError;

pub(crate) fn into_status_error(error: PromotionsServiceError) -> StatusError {
    match error {
        PromotionsServiceError::Validation(message) => StatusError::bad_request().brief(message),
        PromotionsServiceError::NotFound(id) => {
            StatusError::not_found().brief(format!("no promotion with id {id}"))
        }
        PromotionsServiceError::InvalidPeriod | PromotionsServiceError::InvalidDiscount => {
            StatusError::bad_request().brief(error.to_string())
        }
        PromotionsServiceError::AlreadyExists => {
            StatusError::conflict().brief("promotion already exists")
        }
        PromotionsServiceError::InvalidReference
        | PromotionsServiceError::MissingRequiredData
        | PromotionsServiceError::InvalidData => {
            StatusError::bad_request().brief("invalid promotion payload")
        }
        PromotionsServiceError::Sql(source) => {
            error!("promotion storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
