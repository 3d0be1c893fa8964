use crate::{AppState, errors::ApiError};
use axum::{Json, extract::State};
use market_core::{
    models::MarketRecord,
    ports::{MarketRepository, MarketplaceRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    get,
    path = "/api/markets/",
    responses(
        (status = OK, body = [MarketRecord]),
        (status = INTERNAL_SERVER_ERROR)
    ),
    tags = ["markets"]
)]
/// List every market, ordered by id
pub async fn list_markets<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<MarketRecord>>, ApiError> {
    let records = state.repository.list_markets().await.map_err(|error| {
        event!(Level::ERROR, ?error);
        ApiError::Internal
    })?;

    Ok(Json(records))
}
