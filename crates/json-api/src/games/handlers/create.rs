//! Create Game Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use arcade_app::domain::games::{
    data::GameData,
    records::{Genre, Rating, UnknownVariantError},
};

use crate::{extensions::*, games::errors::into_status_error, state::State};

/// Game change request: the transport shape shared by create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct GameRequest {
    pub name: String,
    pub company: String,
    pub price: f64,
    /// Age rating symbolic name, e.g. "Teen"
    pub rating: String,
    /// Genre symbolic name, e.g. "RPG"
    pub genre: String,
}

impl TryFrom<GameRequest> for GameData {
    type Error = UnknownVariantError;

    fn try_from(request: GameRequest) -> Result<Self, Self::Error> {
        Ok(GameData {
            name: request.name,
            company: request.company,
            price: request.price,
            rating: request.rating.parse::<Rating>()?,
            genre: request.genre.parse::<Genre>()?,
        })
    }
}

/// Game Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GameCreatedResponse {
    /// Created game id
    pub id: i64,
}

/// Create Game Handler
#[endpoint(
    tags("games"),
    summary = "Create Game",
    responses(
        (status_code = StatusCode::CREATED, description = "Game created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<GameRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<GameCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let data: GameData = json.into_inner().try_into().or_400("invalid game payload")?;

    let game = state
        .games
        .create_game(data)
        .await
        .map_err(into_status_error)?;

    let id = game.id.into_i64();

    res.add_header(LOCATION, format!("/games/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(GameCreatedResponse { id }))
}
