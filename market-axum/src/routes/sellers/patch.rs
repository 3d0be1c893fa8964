use crate::{AppState, errors::ApiError};
use axum::{
    Json,
    extract::{Path, State},
};
use market_core::{
    models::{FieldErrors, SellerDto, SellerId, SellerPatch, SellerRecord, invalid_pk},
    ports::{MarketplaceRepository, SellerFailure, SellerRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    patch,
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
/// Validate the supplied fields and merge them over the seller. The market
/// set is replaced only if the payload carries one.
pub async fn patch_seller<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Path(seller_id): Path<SellerId>,
    Json(dto): Json<SellerDto>,
) -> Result<Json<SellerRecord>, ApiError> {
    let patch = SellerPatch::try_from(dto)?;

    let record = state
        .repository
        .patch_seller(seller_id, patch)
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
