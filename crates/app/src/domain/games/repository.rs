//! Games Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::{
    games::{
        data::GameData,
        records::{GameId, GameRecord},
    },
    promotions::records::PromotionId,
};

const LIST_GAMES_SQL: &str = include_str!("sql/list_games.sql");
const GET_GAME_SQL: &str = include_str!("sql/get_game.sql");
const CREATE_GAME_SQL: &str = include_str!("sql/create_game.sql");
const UPDATE_GAME_SQL: &str = include_str!("sql/update_game.sql");
const DELETE_GAME_SQL: &str = include_str!("sql/delete_game.sql");

/// Persistence contract for catalog games.
///
/// Store failures are not interpreted by callers; they propagate as
/// [`sqlx::Error`] unmodified.
#[automock]
#[async_trait]
pub trait GamesRepository: Send + Sync {
    /// Fetch a single game, absent when the id is unknown.
    async fn get_game(&self, id: GameId) -> Result<Option<GameRecord>, sqlx::Error>;

    /// Fetch every game, in store order.
    async fn list_games(&self) -> Result<Vec<GameRecord>, sqlx::Error>;

    /// Insert a new game; the store assigns its identity.
    async fn create_game(&self, data: GameData) -> Result<GameRecord, sqlx::Error>;

    /// Write back every scalar field of an existing game.
    async fn update_game(&self, game: GameRecord) -> Result<GameRecord, sqlx::Error>;

    /// Delete a previously fetched game.
    async fn delete_game(&self, game: GameRecord) -> Result<(), sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgGamesRepository {
    pool: PgPool,
}

impl PgGamesRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GamesRepository for PgGamesRepository {
    async fn get_game(&self, id: GameId) -> Result<Option<GameRecord>, sqlx::Error> {
        query_as::<Postgres, GameRecord>(GET_GAME_SQL)
            .bind(id.into_i64())
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_games(&self) -> Result<Vec<GameRecord>, sqlx::Error> {
        query_as::<Postgres, GameRecord>(LIST_GAMES_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn create_game(&self, data: GameData) -> Result<GameRecord, sqlx::Error> {
        query_as::<Postgres, GameRecord>(CREATE_GAME_SQL)
            .bind(&data.name)
            .bind(&data.company)
            .bind(data.price)
            .bind(data.rating.as_str())
            .bind(data.genre.as_str())
            .fetch_one(&self.pool)
            .await
    }

    async fn update_game(&self, game: GameRecord) -> Result<GameRecord, sqlx::Error> {
        query_as::<Postgres, GameRecord>(UPDATE_GAME_SQL)
            .bind(game.id.into_i64())
            .bind(&game.name)
            .bind(&game.company)
            .bind(game.price)
            .bind(game.rating.as_str())
            .bind(game.genre.as_str())
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_game(&self, game: GameRecord) -> Result<(), sqlx::Error> {
        query(DELETE_GAME_SQL)
            .bind(game.id.into_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for GameRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let rating: String = row.try_get("rating")?;
        let genre: String = row.try_get("genre")?;
        let promotion_ids: Vec<i64> = row.try_get("promotion_ids")?;

        Ok(Self {
            id: GameId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            company: row.try_get("company")?,
            price: row.try_get("price")?,
            rating: rating.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "rating".to_string(),
                source: Box::new(e),
            })?,
            genre: genre.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "genre".to_string(),
                source: Box::new(e),
            })?,
            promotions: promotion_ids.into_iter().map(PromotionId::from_i64).collect(),
        })
    }
}
