//! Update Game Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use arcade_app::domain::games::{data::GameData, records::GameId};

use crate::{
    extensions::*,
    games::{errors::into_status_error, handlers::create::GameRequest},
    state::State,
};

/// Update Game Handler
///
/// Overwrites the scalar fields of an existing game; its promotions are
/// left untouched.
#[endpoint(
    tags("games"),
    summary = "Update Game",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Game updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Game not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<GameRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let data: GameData = json.into_inner().try_into().or_400("invalid game payload")?;

    state
        .games
        .update_game(GameId::from_i64(id.into_inner()), data)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use arcade_app::domain::games::{
        GamesServiceError,
        MockGamesService,
        records::{Genre, Rating},
    };

    use crate::test_helpers::{games_service, make_game};

    use super::*;

    fn make_service(games: MockGamesService) -> Service {
        games_service(games, Router::with_path("games/{id}").put(handler))
    }

    fn chrono_body() -> serde_json::Value {
        json!({
            "name": "Chrono",
            "company": "Square",
            "price": 59.99,
            "rating": "Teen",
            "genre": "RPG",
        })
    }

    #[tokio::test]
    async fn test_update_game_success_returns_204() -> TestResult {
        let mut games = MockGamesService::new();

        games
            .expect_update_game()
            .once()
            .withf(|id, data| {
                *id == GameId::from_i64(7)
                    && data.name == "Chrono"
                    && data.rating == Rating::Teen
                    && data.genre == Genre::Rpg
            })
            .return_once(|_, _| Ok(make_game(7)));

        games.expect_create_game().never();
        games.expect_list_games().never();
        games.expect_delete_game().never();

        let res = TestClient::put("http://example.com/games/7")
            .json(&chrono_body())
            .send(&make_service(games))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_game_unknown_id_returns_404() -> TestResult {
        let mut games = MockGamesService::new();

        games
            .expect_update_game()
            .once()
            .return_once(|id, _| Err(GamesServiceError::NotFound(id)));

        games.expect_create_game().never();
        games.expect_list_games().never();
        games.expect_delete_game().never();

        let res = TestClient::put("http://example.com/games/42")
            .json(&chrono_body())
            .send(&make_service(games))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_game_non_numeric_id_returns_400() -> TestResult {
        let mut games = MockGamesService::new();

        games.expect_create_game().never();
        games.expect_list_games().never();
        games.expect_update_game().never();
        games.expect_delete_game().never();

        let res = TestClient::put("http://example.com/games/abc")
            .json(&chrono_body())
            .send(&make_service(games))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_game_unknown_rating_returns_400() -> TestResult {
        let mut games = MockGamesService::new();

        games.expect_create_game().never();
        games.expect_list_games().never();
        games.expect_update_game().never();
        games.expect_delete_game().never();

        let mut body = chrono_body();

        body["rating"] = json!("Infants");

        let res = TestClient::put("http://example.com/games/7")
            .json(&body)
            .send(&make_service(games))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
