use crate::{AppState, errors::ApiError};
use axum::{Json, extract::State, http::StatusCode};
use market_core::{
    models::{MarketData, MarketDto, MarketRecord},
    ports::{MarketRepository, MarketplaceRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    post,
    path = "/api/markets/",
    request_body = MarketDto,
    responses(
        (status = CREATED, body = MarketRecord),
        (status = BAD_REQUEST, body = market_core::models::FieldErrors),
        (status = UNSUPPORTED_MEDIA_TYPE), // JSON failure, handled by Axum
        (status = UNPROCESSABLE_ENTITY), // JSON failure, handled by Axum
        (status = INTERNAL_SERVER_ERROR)
    ),
    tags = ["markets"]
)]
/// Validate the payload and create a new market
pub async fn post_market<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Json(dto): Json<MarketDto>,
) -> Result<(StatusCode, Json<MarketRecord>), ApiError> {
    let data = MarketData::try_from(dto)?;

    let record = state.repository.create_market(data).await.map_err(|error| {
        event!(Level::ERROR, ?error);
        ApiError::Internal
    })?;

    Ok((StatusCode::CREATED, Json(record)))
}
