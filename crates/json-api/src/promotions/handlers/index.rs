//! Promotion Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use arcade_app::domain::promotions::records::PromotionRecord;

use crate::{extensions::*, promotions::errors::into_status_error, state::State};

/// Promotion Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionResponse {
    /// The unique identifier of the promotion
    pub id: i64,

    /// The display name of the promotion
    pub name: String,

    /// RFC 3339 start of the discount window
    pub start_date: String,

    /// RFC 3339 end of the discount window
    pub end_date: String,

    /// Whole percentage points, 0 to 100
    pub discount_percentage: i32,

    /// Ids of the games this promotion applies to
    pub games: Vec<i64>,
}

impl From<PromotionRecord> for PromotionResponse {
    fn from(promotion: PromotionRecord) -> Self {
        PromotionResponse {
            id: promotion.id.into_i64(),
            name: promotion.name,
            start_date: promotion.start_date.to_string(),
            end_date: promotion.end_date.to_string(),
            discount_percentage: promotion.discount_percentage,
            games: promotion.game_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionsResponse {
    /// The list of promotions
    pub promotions: Vec<PromotionResponse>,
}

/// Promotion Index Handler
///
/// Returns all promotions with their linked game ids.
#[endpoint(tags("promotions"), summary = "List Promotions")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PromotionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let promotions = state
        .promotions
        .list_promotions()
        .await
        .map_err(into_status_error)?;

    Ok(Json(PromotionsResponse {
        promotions: promotions.into_iter().map(Into::into).collect(),
    }))
}
