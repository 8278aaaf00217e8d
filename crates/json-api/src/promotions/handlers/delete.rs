//! Delete Promotion Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use arcade_app::domain::promotions::records::PromotionId;

use crate::{extensions::*, promotions::errors::into_status_error, state::State};

/// Delete Promotion Handler
///
/// Removes an existing promotion and its game links.
#[endpoint(
    tags("promotions"),
    summary = "Delete Promotion",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Promotion deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .promotions
        .delete_promotion(PromotionId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
