//! Update Promotion Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use arcade_app::domain::promotions::{data::PromotionData, records::PromotionId};

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, handlers::create::PromotionRequest},
    state::State,
};

/// Update Promotion Handler
///
/// Overwrites the scalar fields of an existing promotion; its game links
/// are left untouched.
#[endpoint(
    tags("promotions"),
    summary = "Update Promotion",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Promotion updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<PromotionRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let data: PromotionData = json
        .into_inner()
        .try_into()
        .or_400("invalid promotion payload")?;

    state
        .promotions
        .update_promotion(PromotionId::from_i64(id.into_inner()), data)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
