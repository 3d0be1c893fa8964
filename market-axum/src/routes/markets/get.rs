use crate::{AppState, errors::ApiError};
use axum::{
    Json,
    extract::{Path, State},
};
use market_core::{
    models::{MarketId, MarketRecord},
    ports::{MarketRepository, MarketplaceRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    get,
    path = "/api/markets/{market_id}/",
    responses(
        (status = OK, body = MarketRecord),
        (status = NOT_FOUND), // no market by that id
        (status = INTERNAL_SERVER_ERROR)
    ),
    params(
        ("market_id" = MarketId, description = "Unique identifier of the market"),
    ),
    tags = ["markets"]
)]
/// Get the current record for the market, or return 404 if there is none
pub async fn get_market<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Path(market_id): Path<MarketId>,
) -> Result<Json<MarketRecord>, ApiError> {
    let record = state
        .repository
        .get_market(market_id)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .ok_or(ApiError::NotFound("Market"))?;

    Ok(Json(record))
}
