//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use arcade_app::domain::{
    games::{
        MockGamesService,
        records::{GameId, GameRecord, Genre, Rating},
    },
    promotions::{
        MockPromotionsService,
        records::{PromotionId, PromotionRecord},
    },
};

use crate::state::State;

pub(crate) fn make_game(id: i64) -> GameRecord {
    GameRecord {
        id: GameId::from_i64(id),
        name: "Chrono".to_string(),
        company: "Square".to_string(),
        price: 59.99,
        rating: Rating::Teen,
        genre: Genre::Rpg,
        promotions: vec![],
    }
}

pub(crate) fn make_promotion(id: i64) -> PromotionRecord {
    PromotionRecord {
        id: PromotionId::from_i64(id),
        name: "Summer Sale".to_string(),
        start_date: Timestamp::UNIX_EPOCH,
        end_date: Timestamp::UNIX_EPOCH,
        discount_percentage: 30,
        game_ids: vec![],
    }
}

fn strict_games_mock() -> MockGamesService {
    let mut games = MockGamesService::new();

    games.expect_create_game().never();
    games.expect_list_games().never();
    games.expect_update_game().never();
    games.expect_delete_game().never();

    games
}

fn strict_promotions_mock() -> MockPromotionsService {
    let mut promotions = MockPromotionsService::new();

    promotions.expect_create_promotion().never();
    promotions.expect_list_promotions().never();
    promotions.expect_update_promotion().never();
    promotions.expect_delete_promotion().never();
    promotions.expect_add_game().never();
    promotions.expect_remove_game().never();

    promotions
}

pub(crate) fn state_with_games(games: MockGamesService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(games),
        Arc::new(strict_promotions_mock()),
    ))
}

pub(crate) fn state_with_promotions(promotions: MockPromotionsService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_games_mock()),
        Arc::new(promotions),
    ))
}

pub(crate) fn games_service(games: MockGamesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_games(games)))
            .push(route),
    )
}

pub(crate) fn promotions_service(promotions: MockPromotionsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_promotions(promotions)))
            .push(route),
    )
}
