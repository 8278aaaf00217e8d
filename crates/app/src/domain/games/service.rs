//! Games service.
//!
//! The write-path orchestrator: validate an incoming change, apply it to
//! the system of record, then best-effort notify the topic. Persistence
//! and notification are not atomic; a write whose notification fails is
//! still reported successful and the failure is visible only in the log.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{error, info};

use crate::domain::games::{
    data::GameData,
    errors::GamesServiceError,
    publisher::GameChangePublisher,
    records::{GameId, GameRecord},
    repository::GamesRepository,
    validation,
};

#[derive(Clone)]
pub struct PgGamesService {
    repository: Arc<dyn GamesRepository>,
    publisher: GameChangePublisher,
}

impl PgGamesService {
    #[must_use]
    pub fn new(repository: Arc<dyn GamesRepository>, publisher: GameChangePublisher) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    fn validate(data: &GameData) -> Result<(), GamesServiceError> {
        match validation::missing_required_fields(data) {
            Some(message) => Err(GamesServiceError::Validation(message)),
            None => Ok(()),
        }
    }

    /// Best-effort notification of a committed write.
    ///
    /// A failure here must not fail the request that triggered it: it is
    /// logged and discarded, and the downstream read model may diverge
    /// until it next converges through some other write.
    async fn publish_change(&self, game: &GameRecord) {
        if let Err(err) = self.publisher.publish(game).await {
            error!(game_id = %game.id, "failed to publish game change: {err}");
        }
    }
}

#[async_trait]
impl GamesService for PgGamesService {
    #[tracing::instrument(name = "games.service.create_game", skip(self, data), err)]
    async fn create_game(&self, data: GameData) -> Result<GameRecord, GamesServiceError> {
        Self::validate(&data)?;

        let created = self.repository.create_game(data).await?;

        self.publish_change(&created).await;

        info!(game_id = %created.id, "created game");

        Ok(created)
    }

    #[tracing::instrument(
        name = "games.service.update_game",
        skip(self, data),
        fields(game_id = %id),
        err
    )]
    async fn update_game(
        &self,
        id: GameId,
        data: GameData,
    ) -> Result<GameRecord, GamesServiceError> {
        Self::validate(&data)?;

        let mut game = self
            .repository
            .get_game(id)
            .await?
            .ok_or(GamesServiceError::NotFound(id))?;

        data.apply_to(&mut game);

        let updated = self.repository.update_game(game).await?;

        self.publish_change(&updated).await;

        info!(game_id = %updated.id, "updated game");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "games.service.delete_game",
        skip(self),
        fields(game_id = %id),
        err
    )]
    async fn delete_game(&self, id: GameId) -> Result<(), GamesServiceError> {
        let game = self
            .repository
            .get_game(id)
            .await?
            .ok_or(GamesServiceError::NotFound(id))?;

        self.repository.delete_game(game).await?;

        info!(game_id = %id, "deleted game");

        Ok(())
    }

    #[tracing::instrument(name = "games.service.list_games", skip(self), err)]
    async fn list_games(&self) -> Result<Vec<GameRecord>, GamesServiceError> {
        let games = self.repository.list_games().await?;

        info!(count = games.len(), "listed games");

        Ok(games)
    }
}

#[automock]
#[async_trait]
pub trait GamesService: Send + Sync {
    /// Validate and persist a new game, then best-effort notify the topic.
    /// The store assigns the identity.
    async fn create_game(&self, data: GameData) -> Result<GameRecord, GamesServiceError>;

    /// Overwrite the five scalar fields of an existing game, then
    /// best-effort notify the topic. The promotions collection is never
    /// touched by this path.
    async fn update_game(&self, id: GameId, data: GameData)
    -> Result<GameRecord, GamesServiceError>;

    /// Delete an existing game. Never notifies the topic.
    async fn delete_game(&self, id: GameId) -> Result<(), GamesServiceError>;

    /// Every game, in store order.
    async fn list_games(&self) -> Result<Vec<GameRecord>, GamesServiceError>;
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use testresult::TestResult;

    use crate::{
        domain::{
            games::{
                records::{Genre, Rating},
                repository::MockGamesRepository,
            },
            promotions::records::PromotionId,
        },
        messaging::{MockTopicSender, SendError},
    };

    use super::*;

    const TOPIC: &str = "game-updates";

    fn chrono() -> GameData {
        GameData {
            name: "Chrono".to_string(),
            company: "Square".to_string(),
            price: 59.99,
            rating: Rating::Teen,
            genre: Genre::Rpg,
        }
    }

    fn persisted(id: i64, data: &GameData) -> GameRecord {
        GameRecord {
            id: GameId::from_i64(id),
            name: data.name.clone(),
            company: data.company.clone(),
            price: data.price,
            rating: data.rating,
            genre: data.genre,
            promotions: vec![],
        }
    }

    fn service(repository: MockGamesRepository, sender: MockTopicSender) -> PgGamesService {
        PgGamesService::new(
            Arc::new(repository),
            GameChangePublisher::new(Arc::new(sender), TOPIC),
        )
    }

    fn untouched_repository() -> MockGamesRepository {
        let mut repository = MockGamesRepository::new();

        repository.expect_get_game().never();
        repository.expect_list_games().never();
        repository.expect_create_game().never();
        repository.expect_update_game().never();
        repository.expect_delete_game().never();

        repository
    }

    fn silent_sender() -> MockTopicSender {
        let mut sender = MockTopicSender::new();

        sender.expect_send().never();

        sender
    }

    #[tokio::test]
    async fn create_game_with_empty_name_never_touches_the_store() {
        let service = service(untouched_repository(), silent_sender());

        let result = service
            .create_game(GameData {
                name: String::new(),
                ..chrono()
            })
            .await;

        match result {
            Err(GamesServiceError::Validation(message)) => {
                assert_eq!(message, "field 'name' must not be empty");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_game_with_whitespace_company_never_touches_the_store() {
        let service = service(untouched_repository(), silent_sender());

        let result = service
            .update_game(
                GameId::from_i64(1),
                GameData {
                    company: "   ".to_string(),
                    ..chrono()
                },
            )
            .await;

        assert!(
            matches!(result, Err(GamesServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_game_persists_then_publishes_the_assigned_identity() -> TestResult {
        let data = chrono();
        let record = persisted(1, &data);

        let mut seq = Sequence::new();
        let mut repository = MockGamesRepository::new();
        let mut sender = MockTopicSender::new();

        let expected = data.clone();

        repository
            .expect_create_game()
            .once()
            .in_sequence(&mut seq)
            .withf(move |data| *data == expected)
            .return_once(move |_| Ok(record));

        repository.expect_get_game().never();
        repository.expect_update_game().never();
        repository.expect_delete_game().never();

        sender
            .expect_send()
            .once()
            .in_sequence(&mut seq)
            .withf(|topic, body| {
                topic == TOPIC
                    && body
                        == r#"{"Id":1,"Name":"Chrono","Company":"Square","Price":59.99,"Genre":"RPG","Rating":"Teen"}"#
            })
            .return_once(|_, _| Ok(()));

        let created = service(repository, sender).create_game(data).await?;

        assert_eq!(created.id, GameId::from_i64(1));

        Ok(())
    }

    #[tokio::test]
    async fn update_game_unknown_id_attempts_no_write_and_no_publish() {
        let mut repository = MockGamesRepository::new();

        repository
            .expect_get_game()
            .once()
            .withf(|id| *id == GameId::from_i64(42))
            .return_once(|_| Ok(None));

        repository.expect_update_game().never();
        repository.expect_create_game().never();
        repository.expect_delete_game().never();

        let result = service(repository, silent_sender())
            .update_game(GameId::from_i64(42), chrono())
            .await;

        assert!(
            matches!(result, Err(GamesServiceError::NotFound(id)) if id == GameId::from_i64(42)),
            "expected NotFound(42), got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_game_overwrites_scalars_and_leaves_promotions_alone() -> TestResult {
        let id = GameId::from_i64(7);

        let existing = GameRecord {
            id,
            name: "Old Name".to_string(),
            company: "Old Co".to_string(),
            price: 9.99,
            rating: Rating::Everyone,
            genre: Genre::Puzzle,
            promotions: vec![PromotionId::from_i64(3)],
        };

        let data = chrono();

        let mut seq = Sequence::new();
        let mut repository = MockGamesRepository::new();
        let mut sender = MockTopicSender::new();

        repository
            .expect_get_game()
            .once()
            .in_sequence(&mut seq)
            .withf(move |got| *got == id)
            .return_once(move |_| Ok(Some(existing)));

        repository
            .expect_update_game()
            .once()
            .in_sequence(&mut seq)
            .withf(move |game| {
                game.id == id
                    && game.name == "Chrono"
                    && game.company == "Square"
                    && game.price == 59.99
                    && game.rating == Rating::Teen
                    && game.genre == Genre::Rpg
                    && game.promotions == vec![PromotionId::from_i64(3)]
            })
            .return_once(Ok);

        repository.expect_create_game().never();
        repository.expect_delete_game().never();

        sender
            .expect_send()
            .once()
            .in_sequence(&mut seq)
            .withf(|topic, body| topic == TOPIC && body.contains(r#""Id":7"#))
            .return_once(|_, _| Ok(()));

        let updated = service(repository, sender).update_game(id, data).await?;

        assert_eq!(updated.promotions, vec![PromotionId::from_i64(3)]);

        Ok(())
    }

    #[tokio::test]
    async fn delete_game_removes_the_record_and_never_publishes() -> TestResult {
        let id = GameId::from_i64(5);
        let record = persisted(5, &chrono());

        let mut repository = MockGamesRepository::new();

        repository
            .expect_get_game()
            .once()
            .withf(move |got| *got == id)
            .return_once(move |_| Ok(Some(record)));

        repository
            .expect_delete_game()
            .once()
            .withf(move |game| game.id == id)
            .return_once(|_| Ok(()));

        repository.expect_create_game().never();
        repository.expect_update_game().never();

        service(repository, silent_sender()).delete_game(id).await?;

        Ok(())
    }

    #[tokio::test]
    async fn delete_game_unknown_id_attempts_no_delete() {
        let mut repository = MockGamesRepository::new();

        repository.expect_get_game().once().return_once(|_| Ok(None));
        repository.expect_delete_game().never();

        let result = service(repository, silent_sender())
            .delete_game(GameId::from_i64(42))
            .await;

        assert!(
            matches!(result, Err(GamesServiceError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_game_still_succeeds_when_the_publish_fails() -> TestResult {
        let data = chrono();
        let record = persisted(1, &data);

        let mut repository = MockGamesRepository::new();
        let mut sender = MockTopicSender::new();

        repository
            .expect_create_game()
            .once()
            .return_once(move |_| Ok(record));

        sender
            .expect_send()
            .once()
            .return_once(|_, _| Err(SendError::Channel(lapin::Error::ChannelsLimitReached)));

        let created = service(repository, sender).create_game(data).await?;

        assert_eq!(created.id, GameId::from_i64(1));

        Ok(())
    }

    #[tokio::test]
    async fn update_game_still_succeeds_when_the_publish_fails() -> TestResult {
        let id = GameId::from_i64(2);
        let record = persisted(2, &chrono());

        let mut repository = MockGamesRepository::new();
        let mut sender = MockTopicSender::new();

        repository
            .expect_get_game()
            .once()
            .return_once(move |_| Ok(Some(record)));

        repository
            .expect_update_game()
            .once()
            .return_once(Ok);

        sender
            .expect_send()
            .once()
            .return_once(|_, _| Err(SendError::Channel(lapin::Error::ChannelsLimitReached)));

        let updated = service(repository, sender).update_game(id, chrono()).await?;

        assert_eq!(updated.id, id);

        Ok(())
    }

    #[tokio::test]
    async fn list_games_returns_the_store_order() -> TestResult {
        let first = persisted(1, &chrono());
        let second = persisted(2, &chrono());

        let mut repository = MockGamesRepository::new();

        repository
            .expect_list_games()
            .once()
            .return_once(move || Ok(vec![first, second]));

        let games = service(repository, silent_sender()).list_games().await?;

        let ids: Vec<GameId> = games.iter().map(|game| game.id).collect();

        assert_eq!(ids, vec![GameId::from_i64(1), GameId::from_i64(2)]);

        Ok(())
    }

    #[tokio::test]
    async fn store_failures_propagate_uninterpreted() {
        let mut repository = MockGamesRepository::new();

        repository
            .expect_create_game()
            .once()
            .return_once(|_| Err(sqlx::Error::PoolClosed));

        let result = service(repository, silent_sender()).create_game(chrono()).await;

        assert!(
            matches!(result, Err(GamesServiceError::Sql(_))),
            "expected Sql, got {result:?}"
        );
    }
}
