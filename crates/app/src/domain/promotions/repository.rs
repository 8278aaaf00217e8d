//! Promotions Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::{
    games::records::GameId,
    promotions::{
        data::PromotionData,
        records::{PromotionId, PromotionRecord},
    },
};

const LIST_PROMOTIONS_SQL: &str = include_str!("sql/list_promotions.sql");
const GET_PROMOTION_SQL: &str = include_str!("sql/get_promotion.sql");
const CREATE_PROMOTION_SQL: &str = include_str!("sql/create_promotion.sql");
const UPDATE_PROMOTION_SQL: &str = include_str!("sql/update_promotion.sql");
const DELETE_PROMOTION_SQL: &str = include_str!("sql/delete_promotion.sql");
const ADD_PROMOTION_GAME_SQL: &str = include_str!("sql/add_promotion_game.sql");
const REMOVE_PROMOTION_GAME_SQL: &str = include_str!("sql/remove_promotion_game.sql");

/// Persistence contract for promotions and their game links.
#[automock]
#[async_trait]
pub trait PromotionsRepository: Send + Sync {
    /// Fetch a single promotion, absent when the id is unknown.
    async fn get_promotion(&self, id: PromotionId)
    -> Result<Option<PromotionRecord>, sqlx::Error>;

    /// Fetch every promotion, in store order.
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, sqlx::Error>;

    /// Insert a new promotion; the store assigns its identity.
    async fn create_promotion(&self, data: PromotionData)
    -> Result<PromotionRecord, sqlx::Error>;

    /// Write back the scalar fields of an existing promotion.
    async fn update_promotion(
        &self,
        promotion: PromotionRecord,
    ) -> Result<PromotionRecord, sqlx::Error>;

    /// Delete a previously fetched promotion; its links go with it.
    async fn delete_promotion(&self, promotion: PromotionRecord) -> Result<(), sqlx::Error>;

    /// Link a game to a promotion. The store enforces that both sides
    /// exist.
    async fn add_game(&self, promotion: PromotionId, game: GameId) -> Result<(), sqlx::Error>;

    /// Unlink a game from a promotion, returning the number of links
    /// removed.
    async fn remove_game(&self, promotion: PromotionId, game: GameId)
    -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgPromotionsRepository {
    pool: PgPool,
}

impl PgPromotionsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromotionsRepository for PgPromotionsRepository {
    async fn get_promotion(
        &self,
        id: PromotionId,
    ) -> Result<Option<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(GET_PROMOTION_SQL)
            .bind(id.into_i64())
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_PROMOTIONS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn create_promotion(
        &self,
        data: PromotionData,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(CREATE_PROMOTION_SQL)
            .bind(&data.name)
            .bind(SqlxTimestamp::from(data.start_date))
            .bind(SqlxTimestamp::from(data.end_date))
            .bind(data.discount_percentage)
            .fetch_one(&self.pool)
            .await
    }

    async fn update_promotion(
        &self,
        promotion: PromotionRecord,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(UPDATE_PROMOTION_SQL)
            .bind(promotion.id.into_i64())
            .bind(&promotion.name)
            .bind(SqlxTimestamp::from(promotion.start_date))
            .bind(SqlxTimestamp::from(promotion.end_date))
            .bind(promotion.discount_percentage)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_promotion(&self, promotion: PromotionRecord) -> Result<(), sqlx::Error> {
        query(DELETE_PROMOTION_SQL)
            .bind(promotion.id.into_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn add_game(&self, promotion: PromotionId, game: GameId) -> Result<(), sqlx::Error> {
        query(ADD_PROMOTION_GAME_SQL)
            .bind(promotion.into_i64())
            .bind(game.into_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn remove_game(
        &self,
        promotion: PromotionId,
        game: GameId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(REMOVE_PROMOTION_GAME_SQL)
            .bind(promotion.into_i64())
            .bind(game.into_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for PromotionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let game_ids: Vec<i64> = row.try_get("game_ids")?;

        Ok(Self {
            id: PromotionId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            start_date: row.try_get::<SqlxTimestamp, _>("start_date")?.to_jiff(),
            end_date: row.try_get::<SqlxTimestamp, _>("end_date")?.to_jiff(),
            discount_percentage: row.try_get("discount_percentage")?,
            game_ids: game_ids.into_iter().map(GameId::from_i64).collect(),
        })
    }
}
