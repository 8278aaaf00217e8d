//! Create Promotion Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use arcade_app::domain::promotions::data::PromotionData;

use crate::{extensions::*, promotions::errors::into_status_error, state::State};

/// Promotion change request: the transport shape shared by create and
/// update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionRequest {
    pub name: String,

    /// RFC 3339 start of the discount window
    pub start_date: String,

    /// RFC 3339 end of the discount window
    pub end_date: String,

    /// Whole percentage points, 0 to 100
    pub discount_percentage: i32,
}

impl TryFrom<PromotionRequest> for PromotionData {
    type Error = jiff::Error;

    fn try_from(request: PromotionRequest) -> Result<Self, Self::Error> {
        Ok(PromotionData {
            name: request.name,
            start_date: request.start_date.parse::<Timestamp>()?,
            end_date: request.end_date.parse::<Timestamp>()?,
            discount_percentage: request.discount_percentage,
        })
    }
}

/// Promotion Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionCreatedResponse {
    /// Created promotion id
    pub id: i64,
}

/// Create Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Create Promotion",
    responses(
        (status_code = StatusCode::CREATED, description = "Promotion created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PromotionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromotionCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let data: PromotionData = json
        .into_inner()
        .try_into()
        .or_400("invalid promotion payload")?;

    let promotion = state
        .promotions
        .create_promotion(data)
        .await
        .map_err(into_status_error)?;

    let id = promotion.id.into_i64();

    res.add_header(LOCATION, format!("/promotions/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(PromotionCreatedResponse { id }))
}
