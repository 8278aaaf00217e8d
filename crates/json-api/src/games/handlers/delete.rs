//! Delete Game Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use arcade_app::domain::games::records::GameId;

use crate::{extensions::*, games::errors::into_status_error, state::State};

/// Delete Game Handler
///
/// Removes an existing game. No notification is sent for deletes.
#[endpoint(
    tags("games"),
    summary = "Delete Game",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Game deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Game not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .games
        .delete_game(GameId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
