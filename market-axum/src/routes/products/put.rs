use crate::{AppState, errors::ApiError};
use axum::{
    Json,
    extract::{Path, State},
};
use market_core::{
    models::{FieldErrors, ProductData, ProductDto, ProductId, ProductRecord, invalid_pk},
    ports::{MarketplaceRepository, ProductFailure, ProductRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    put,
    path = "/api/products/{product_id}/",
    request_body = ProductDto,
    responses(
        (status = OK, body = ProductRecord),
        (status = BAD_REQUEST, body = FieldErrors),
        (status = NOT_FOUND), // no product by that id
        (status = INTERNAL_SERVER_ERROR)
    ),
    params(
        ("product_id" = ProductId, description = "Unique identifier of the product"),
    ),
    tags = ["products"]
)]
/// Validate the full payload and replace the product, relations included
pub async fn put_product<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Path(product_id): Path<ProductId>,
    Json(dto): Json<ProductDto>,
) -> Result<Json<ProductRecord>, ApiError> {
    let data = ProductData::try_from(dto)?;

    let record = state
        .repository
        .update_product(product_id, data)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .map_err(|err| match err {
            ProductFailure::DoesNotExist => ApiError::NotFound("Product"),
            ProductFailure::UnknownSeller(id) => {
                ApiError::Validation(FieldErrors::field("seller", invalid_pk(id)))
            }
            ProductFailure::UnknownMarket(id) => {
                ApiError::Validation(FieldErrors::field("markets", invalid_pk(id)))
            }
        })?;

    Ok(Json(record))
}
