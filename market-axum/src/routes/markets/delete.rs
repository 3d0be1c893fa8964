use crate::{AppState, errors::ApiError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use market_core::{
    models::MarketId,
    ports::{MarketFailure, MarketRepository, MarketplaceRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    delete,
    path = "/api/markets/{market_id}/",
    responses(
        (status = NO_CONTENT),
        (status = NOT_FOUND), // no market by that id
        (status = INTERNAL_SERVER_ERROR)
    ),
    params(
        ("market_id" = MarketId, description = "Unique identifier of the market"),
    ),
    tags = ["markets"]
)]
/// Delete the market. Sellers and products keep their rows; only the
/// associations to this market go away.
pub async fn delete_market<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Path(market_id): Path<MarketId>,
) -> Result<StatusCode, ApiError> {
    state
        .repository
        .delete_market(market_id)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .map_err(|err| match err {
            MarketFailure::DoesNotExist => ApiError::NotFound("Market"),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
