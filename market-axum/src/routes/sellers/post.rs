use crate::{AppState, errors::ApiError};
use axum::{Json, extract::State, http::StatusCode};
use market_core::{
    models::{FieldErrors, SellerData, SellerDto, SellerRecord, invalid_pk},
    ports::{MarketplaceRepository, SellerFailure, SellerRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    post,
    path = "/api/sellers/",
    request_body = SellerDto,
    responses(
        (status = CREATED, body = SellerRecord),
        (status = BAD_REQUEST, body = FieldErrors),
        (status = UNSUPPORTED_MEDIA_TYPE), // JSON failure, handled by Axum
        (status = UNPROCESSABLE_ENTITY), // JSON failure, handled by Axum
        (status = INTERNAL_SERVER_ERROR)
    ),
    tags = ["sellers"]
)]
/// Validate the payload and create a new seller with its market set
pub async fn post_seller<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Json(dto): Json<SellerDto>,
) -> Result<(StatusCode, Json<SellerRecord>), ApiError> {
    let data = SellerData::try_from(dto)?;

    let record = state
        .repository
        .create_seller(data)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .map_err(|err| match err {
            SellerFailure::UnknownMarket(id) => {
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
