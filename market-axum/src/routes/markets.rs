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
    let collection = routing::get(list::list_markets)
        .post(post::post_market)
        .fallback(errors::method_not_allowed);
    let detail = routing::get(get::get_market)
        .put(put::put_market)
        .patch(patch::patch_market)
        .delete(delete::delete_market)
        .fallback(errors::method_not_allowed);

    // Canonical paths carry a trailing slash; the bare forms are aliases.
    Router::new()
        .route("/markets/", collection.clone())
        .route("/markets", collection)
        .route("/markets/{market_id}/", detail.clone())
        .route("/markets/{market_id}", detail)
}
