use crate::{AppState, errors::ApiError};
use axum::{
    Json,
    extract::{Path, State},
};
use market_core::{
    models::{FieldErrors, SellerData, SellerDto, SellerId, SellerRecord, invalid_pk},
    ports::{MarketplaceRepository, SellerFailure, SellerRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    put,
    path = "/api/sellers/{seller_id}/",
    request_body = SellerDto,
    responses(
        (status = OK, body = SellerRecord),
        (status = BAD_REQUEST, body = FieldErrors),
        (status = NOT_FOUND), // no seller by that id
        (status = INTERNAL_SERVER_ERROR)
    ),
    params(
        ("seller_id" = SellerId, description = "Unique identifier of the seller"),
    ),
    tags = ["sellers"]
)]
/// Validate the full payload and replace the seller, market set included
pub async fn put_seller<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Path(seller_id): Path<SellerId>,
    Json(dto): Json<SellerDto>,
) -> Result<Json<SellerRecord>, ApiError> {
    let data = SellerData::try_from(dto)?;

    let record = state
        .repository
        .update_seller(seller_id, data)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .map_err(|err| match err {
            SellerFailure::DoesNotExist => ApiError::NotFound("Seller"),
            SellerFailure::UnknownMarket(id) => {
                ApiError::Validation(FieldErrors::field("markets", invalid_pk(id)))
            }
        })?;

    Ok(Json(record))
}
