//! Game Errors

use salvo::http::StatusError;
use tracing::error;

use arcade_app::domain::games::GamesServiceError;

pub(crate) fn into_status_error(error: GamesServiceError) -> StatusError {
    match error {
        GamesServiceError::Validation(message) => StatusError::bad_request().brief(message),
        GamesServiceError::NotFound(id) => {
            StatusError::not_found().brief(format!("no game with id {id}"))
        }
        GamesServiceError::AlreadyExists => StatusError::conflict().brief("game already exists"),
        GamesServiceError::InvalidReference
        | GamesServiceError::MissingRequiredData
        | GamesServiceError::InvalidData => {
            StatusError::bad_request().brief("invalid game payload")
        }
        GamesServiceError::Sql(source) => {
            error!("game storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
