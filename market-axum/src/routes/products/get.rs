use crate::{AppState, errors::ApiError};
use axum::{
    Json,
    extract::{Path, State},
};
use market_core::{
    models::{ProductId, ProductRecord},
    ports::{MarketplaceRepository, ProductRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    get,
    path = "/api/products/{product_id}/",
    responses(
        (status = OK, body = ProductRecord),
        (status = NOT_FOUND), // no product by that id
        (status = INTERNAL_SERVER_ERROR)
    ),
    params(
        ("product_id" = ProductId, description = "Unique identifier of the product"),
    ),
    tags = ["products"]
)]
/// Get the current record for the product, or return 404 if there is none
pub async fn get_product<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<ProductRecord>, ApiError> {
    let record = state
        .repository
        .get_product(product_id)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .ok_or(ApiError::NotFound("Product"))?;

    Ok(Json(record))
}
