use crate::{AppState, errors::ApiError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use market_core::{
    models::SellerId,
    ports::{MarketplaceRepository, SellerFailure, SellerRepository},
};
use tracing::{Level, event};

#[utoipa::path(
    delete,
    path = "/api/sellers/{seller_id}/",
    responses(
        (status = NO_CONTENT),
        (status = NOT_FOUND), // no seller by that id
        (status = INTERNAL_SERVER_ERROR)
    ),
    params(
        ("seller_id" = SellerId, description = "Unique identifier of the seller"),
    ),
    tags = ["sellers"]
)]
/// Delete the seller along with its products
pub async fn delete_seller<T: MarketplaceRepository>(
    State(state): State<AppState<T>>,
    Path(seller_id): Path<SellerId>,
) -> Result<StatusCode, ApiError> {
    state
        .repository
        .delete_seller(seller_id)
        .await
        .map_err(|error| {
            event!(Level::ERROR, ?error);
            ApiError::Internal
        })?
        .map_err(|err| match err {
            SellerFailure::DoesNotExist => ApiError::NotFound("Seller"),
            // Deletes never touch the market set
            error => {
                event!(Level::ERROR, ?error, "unexpected failure");
                ApiError::Internal
            }
        })?;

    Ok(StatusCode::NO_CONTENT)
}
