use crate::{AppState, errors::ApiError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use market_core::{
    models::ProductId,
    ports::{MarketplaceRepository, ProductFailure, ProductRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    delete,
    path = "/api/products/{product_id}/",
    responses(
        (status = NO_CONTENT),
        (status = NOT_FOUND), // no product by that id
        (status = INTERNAL_SERVER_ERROR)
    ),
    params(
        ("product_id" = ProductId, description = "Unique identifier of the product"),
    ),
    tags = ["products"]
)]
/// Delete the product and its market associations
pub async fn delete_product<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Path(product_id): Path<ProductId>,
) -> Result<StatusCode, ApiError> {
    state
        .repository
        .delete_product(product_id)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .map_err(|err| match err {
            ProductFailure::DoesNotExist => ApiError::NotFound("Product"),
            // Deletes never touch the relations
            error => {
                event!(Level::ERROR, ?error, "unexpected failure");
                ApiError::Internal
            }
        })?;

    Ok(StatusCode::NO_CONTENT)
}
