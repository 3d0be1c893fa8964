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
    let collection = routing::get(list::list_products)
        .post(post::post_product)
        .fallback(errors::method_not_allowed);
    let detail = routing::get(get::get_product)
        .put(put::put_product)
        .patch(patch::patch_product)
        .delete(delete::delete_product)
        .fallback(errors::method_not_allowed);

    // Canonical paths carry a trailing slash; the bare forms are aliases.
    Router::new()
        .route("/products/", collection.clone())
        .route("/products", collection)
        .route("/products/{product_id}/", detail.clone())
        .route("/products/{product_id}", detail)
}
