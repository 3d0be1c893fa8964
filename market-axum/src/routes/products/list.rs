use crate::{AppState, errors::ApiError};
use axum::{Json, extract::State};
use market_core::{
    models::ProductRecord,
    ports::{MarketplaceRepository, ProductRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    get,
    path = "/api/products/",
    responses(
        (status = OK, body = [ProductRecord]),
        (status = INTERNAL_SERVER_ERROR)
    ),
    tags = ["products"]
)]
/// List every product, ordered by id, each with its seller and markets inline
pub async fn list_products<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    let records = state.repository.list_products().await.map_err(|error| {
        event!(Level::ERROR, ?error);
        ApiError::Internal
    })?;

    Ok(Json(records))
}
