use crate::{AppState, errors::ApiError};
use axum::{Json, extract::State};
use market_core::{
    models::SellerRecord,
    ports::{MarketplaceRepository, SellerRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    get,
    path = "/api/sellers/",
    responses(
        (status = OK, body = [SellerRecord]),
        (status = INTERNAL_SERVER_ERROR)
    ),
    tags = ["sellers"]
)]
/// List every seller, ordered by id, each with its markets inline
pub async fn list_sellers<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<SellerRecord>>, ApiError> {
    let records = state.repository.list_sellers().await.map_err(|error| {
        event!(Level::ERROR, ?error);
        ApiError::Internal
    })?;

    Ok(Json(records))
}
