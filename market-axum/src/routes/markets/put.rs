use crate::{AppState, errors::ApiError};
use axum::{
    Json,
    extract::{Path, State},
};
use market_core::{
    models::{MarketData, MarketDto, MarketId, MarketRecord},
    ports::{MarketFailure, MarketRepository, MarketplaceRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    put,
    path = "/api/markets/{market_id}/",
    request_body = MarketDto,
    responses(
        (status = OK, body = MarketRecord),
        (status = BAD_REQUEST, body = market_core::models::FieldErrors),
        (status = NOT_FOUND), // no market by that id
        (status = INTERNAL_SERVER_ERROR)
    ),
    params(
        ("market_id" = MarketId, description = "Unique identifier of the market"),
    ),
    tags = ["markets"]
)]
/// Validate the full payload and replace every field of the market
pub async fn put_market<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Path(market_id): Path<MarketId>,
    Json(dto): Json<MarketDto>,
) -> Result<Json<MarketRecord>, ApiError> {
    let data = MarketData::try_from(dto)?;

    let record = state
        .repository
        .update_market(market_id, data)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .map_err(|err| match err {
            MarketFailure::DoesNotExist => ApiError::NotFound("Market"),
        })?;

    Ok(Json(record))
}
