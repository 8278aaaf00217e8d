//! Promotion Game Link Handlers
//!
//! Games and promotions form a many-to-many relation, managed here
//! rather than by the game update path.

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use arcade_app::domain::{games::records::GameId, promotions::records::PromotionId};

use crate::{extensions::*, promotions::errors::into_status_error, state::State};

/// Link Game Handler
///
/// Applies an existing promotion to an existing game.
#[endpoint(
    tags("promotions"),
    summary = "Link Game to Promotion",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Game linked"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn add_handler(
    id: PathParam<i64>,
    game_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .promotions
        .add_game(
            PromotionId::from_i64(id.into_inner()),
            GameId::from_i64(game_id.into_inner()),
        )
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Unlink Game Handler
///
/// Removes a promotion from a game.
#[endpoint(
    tags("promotions"),
    summary = "Unlink Game from Promotion",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Game unlinked"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn remove_handler(
    id: PathParam<i64>,
    game_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .promotions
        .remove_game(
            PromotionId::from_i64(id.into_inner()),
            GameId::from_i64(game_id.into_inner()),
        )
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
