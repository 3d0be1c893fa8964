use crate::{AppState, errors};
use axum::{Router, routing};
use market_core::ports::MarketplaceRepository;

pub mod delete;
pub mod get;
pub mod list;
pub mod patch;
pub mod post;
pub mod put;

pub fn router<T: MarketplaceRepository>() -> Router<AppState<T>> {
    let collection = routing::get(list::list_sellers)
        .post(post::post_seller)
        .fallback(errors::method_not_allowed);
    let detail = routing::get(get::get_seller)
        .put(put::put_seller)
        .patch(patch::patch_seller)
        .delete(delete::delete_seller)
        .fallback(errors::method_not_allowed);

    // Canonical paths carry a trailing slash; the bare forms are aliases.
    Router::new()
        .route("/sellers/", collection.clone())
        .route("/sellers", collection)
        .route("/sellers/{seller_id}/", detail.clone())
        .route("/sellers/{seller_id}", detail)
}
