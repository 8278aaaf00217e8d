//! Game Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use arcade_app::domain::games::records::GameRecord;

use crate::{extensions::*, games::errors::into_status_error, state::State};

/// Game Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GameResponse {
    /// The unique identifier of the game
    pub id: i64,

    /// The display name of the game
    pub name: String,

    /// The publishing company
    pub company: String,

    /// The price of the game
    pub price: f64,

    /// Age rating symbolic name
    pub rating: String,

    /// Genre symbolic name
    pub genre: String,

    /// Ids of the promotions applied to this game
    pub promotions: Vec<i64>,
}

impl From<GameRecord> for GameResponse {
    fn from(game: GameRecord) -> Self {
        GameResponse {
            id: game.id.into_i64(),
            name: game.name,
            company: game.company,
            price: game.price,
            rating: game.rating.as_str().to_string(),
            genre: game.genre.as_str().to_string(),
            promotions: game.promotions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GamesResponse {
    /// The list of games
    pub games: Vec<GameResponse>,
}

/// Game Index Handler
///
/// Returns the full catalog, in store order.
#[endpoint(tags("games"), summary = "List Games")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<GamesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let games = state.games.list_games().await.map_err(into_status_error)?;

    Ok(Json(GamesResponse {
        games: games.into_iter().map(Into::into).collect(),
    }))
}
