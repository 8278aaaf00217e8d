//! Promotions service.
//!
//! Promotion writes maintain the catalog's discount windows and their
//! game links. Unlike the games write path they never feed the
//! notification topic.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::domain::{
    games::records::GameId,
    promotions::{
        data::PromotionData,
        errors::PromotionsServiceError,
        records::{PromotionId, PromotionRecord},
        repository::PromotionsRepository,
        validation,
    },
};

#[derive(Clone)]
pub struct PgPromotionsService {
    repository: Arc<dyn PromotionsRepository>,
}

impl PgPromotionsService {
    #[must_use]
    pub fn new(repository: Arc<dyn PromotionsRepository>) -> Self {
        Self { repository }
    }

    fn validate(data: &PromotionData) -> Result<(), PromotionsServiceError> {
        if let Some(message) = validation::missing_required_fields(data) {
            return Err(PromotionsServiceError::Validation(message));
        }

        if !(0..=100).contains(&data.discount_percentage) {
            return Err(PromotionsServiceError::InvalidDiscount);
        }

        if data.end_date < data.start_date {
            return Err(PromotionsServiceError::InvalidPeriod);
        }

        Ok(())
    }
}

#[async_trait]
impl PromotionsService for PgPromotionsService {
    #[tracing::instrument(name = "promotions.service.create_promotion", skip(self, data), err)]
    async fn create_promotion(
        &self,
        data: PromotionData,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        Self::validate(&data)?;

        let created = self.repository.create_promotion(data).await?;

        info!(promotion_id = %created.id, "created promotion");

        Ok(created)
    }

    #[tracing::instrument(name = "promotions.service.list_promotions", skip(self), err)]
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        let promotions = self.repository.list_promotions().await?;

        info!(count = promotions.len(), "listed promotions");

        Ok(promotions)
    }

    #[tracing::instrument(
        name = "promotions.service.update_promotion",
        skip(self, data),
        fields(promotion_id = %id),
        err
    )]
    async fn update_promotion(
        &self,
        id: PromotionId,
        data: PromotionData,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        Self::validate(&data)?;

        let mut promotion = self
            .repository
            .get_promotion(id)
            .await?
            .ok_or(PromotionsServiceError::NotFound(id))?;

        data.apply_to(&mut promotion);

        let updated = self.repository.update_promotion(promotion).await?;

        info!(promotion_id = %updated.id, "updated promotion");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "promotions.service.delete_promotion",
        skip(self),
        fields(promotion_id = %id),
        err
    )]
    async fn delete_promotion(&self, id: PromotionId) -> Result<(), PromotionsServiceError> {
        let promotion = self
            .repository
            .get_promotion(id)
            .await?
            .ok_or(PromotionsServiceError::NotFound(id))?;

        self.repository.delete_promotion(promotion).await?;

        info!(promotion_id = %id, "deleted promotion");

        Ok(())
    }

    #[tracing::instrument(
        name = "promotions.service.add_game",
        skip(self),
        fields(promotion_id = %promotion, game_id = %game),
        err
    )]
    async fn add_game(
        &self,
        promotion: PromotionId,
        game: GameId,
    ) -> Result<(), PromotionsServiceError> {
        self.repository
            .get_promotion(promotion)
            .await?
            .ok_or(PromotionsServiceError::NotFound(promotion))?;

        self.repository.add_game(promotion, game).await?;

        info!(promotion_id = %promotion, game_id = %game, "linked game to promotion");

        Ok(())
    }

    #[tracing::instrument(
        name = "promotions.service.remove_game",
        skip(self),
        fields(promotion_id = %promotion, game_id = %game),
        err
    )]
    async fn remove_game(
        &self,
        promotion: PromotionId,
        game: GameId,
    ) -> Result<(), PromotionsServiceError> {
        let rows_affected = self.repository.remove_game(promotion, game).await?;

        if rows_affected == 0 {
            return Err(PromotionsServiceError::InvalidReference);
        }

        info!(promotion_id = %promotion, game_id = %game, "unlinked game from promotion");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Validate and persist a new promotion. The store assigns the
    /// identity.
    async fn create_promotion(
        &self,
        data: PromotionData,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Every promotion with its linked game ids, in store order.
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError>;

    /// Overwrite the scalar fields of an existing promotion. Game links
    /// are never touched by this path.
    async fn update_promotion(
        &self,
        id: PromotionId,
        data: PromotionData,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Delete an existing promotion and its links.
    async fn delete_promotion(&self, id: PromotionId) -> Result<(), PromotionsServiceError>;

    /// Link a game to an existing promotion.
    async fn add_game(
        &self,
        promotion: PromotionId,
        game: GameId,
    ) -> Result<(), PromotionsServiceError>;

    /// Unlink a game from a promotion.
    async fn remove_game(
        &self,
        promotion: PromotionId,
        game: GameId,
    ) -> Result<(), PromotionsServiceError>;
}
