use crate::{AppState, errors::ApiError};
use axum::{Json, extract::State, http::StatusCode};
use market_core::{
    models::{FieldErrors, ProductData, ProductDto, ProductRecord, invalid_pk},
    ports::{MarketplaceRepository, ProductFailure, ProductRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    post,
    path = "/api/products/",
    request_body = ProductDto,
    responses(
        (status = CREATED, body = ProductRecord),
        (status = BAD_REQUEST, body = FieldErrors),
        (status = UNSUPPORTED_MEDIA_TYPE), // JSON failure, handled by Axum
        (status = UNPROCESSABLE_ENTITY), // JSON failure, handled by Axum
        (status = INTERNAL_SERVER_ERROR)
    ),
    tags = ["products"]
)]
/// Validate the payload and create a new product for its seller
pub async fn post_product<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Json(dto): Json<ProductDto>,
) -> Result<(StatusCode, Json<ProductRecord>), ApiError> {
    let data = ProductData::try_from(dto)?;

    let record = state
        .repository
        .create_product(data)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .map_err(|err| match err {
            ProductFailure::UnknownSeller(id) => {
                ApiError::Validation(FieldErrors::field("seller", invalid_pk(id)))
            }
            ProductFailure::UnknownMarket(id) => {
                ApiError::Validation(FieldErrors::field("markets", invalid_pk(id)))
            }
            // Creates have no target row to miss
            error => {
                event!(Level::ERROR, ?error, "unexpected failure");
                ApiError::Internal
            }
        })?;

    Ok((StatusCode::CREATED, Json(record)))
}
