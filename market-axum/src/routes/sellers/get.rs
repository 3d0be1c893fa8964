use crate::{AppState, errors::ApiError};
use axum::{
    Json,
    extract::{Path, State},
};
use market_core::{
    models::{SellerId, SellerRecord},
    ports::{MarketplaceRepository, SellerRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    get,
    path = "/api/sellers/{seller_id}/",
    responses(
        (status = OK, body = SellerRecord),
        (status = NOT_FOUND), // no seller by that id
        (status = INTERNAL_SERVER_ERROR)
    ),
    params(
        ("seller_id" = SellerId, description = "Unique identifier of the seller"),
    ),
    tags = ["sellers"]
)]
/// Get the current record for the seller, or return 404 if there is none
pub async fn get_seller<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Path(seller_id): Path<SellerId>,
) -> Result<Json<SellerRecord>, ApiError> {
    let record = state
        .repository
        .get_seller(seller_id)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .ok_or(ApiError::NotFound("Seller"))?;

    Ok(Json(record))
}
