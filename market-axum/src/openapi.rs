use axum::Router;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

#[derive(OpenApi)]
#[openapi(paths(
    super::routes::markets::list::list_markets,
    super::routes::markets::post::post_market,
    super::routes::markets::get::get_market,
    super::routes::markets::put::put_market,
    super::routes::markets::patch::patch_market,
    super::routes::markets::delete::delete_market,
    super::routes::sellers::list::list_sellers,
    super::routes::sellers::post::post_seller,
    super::routes::sellers::get::get_seller,
    super::routes::sellers::put::put_seller,
    super::routes::sellers::patch::patch_seller,
    super::routes::sellers::delete::delete_seller,
    super::routes::products::list::list_products,
    super::routes::products::post::post_product,
    super::routes::products::get::get_product,
    super::routes::products::put::put_product,
    super::routes::products::patch::patch_product,
    super::routes::products::delete::delete_product,
))]
/// The OpenAPI spec for the marketplace API
pub struct MarketplaceApi;

pub fn openapi_router() -> Router {
    RapiDoc::with_url(
        "/rapidoc",
        "/api-docs/openapi.json",
        MarketplaceApi::openapi(),
    )
    // rapidoc can be customized according to https://rapidocweb.com/api.html
    .custom_html(
        r#"
<!doctype html> <!-- Important: must specify -->
<html>
  <head>
    <meta charset="utf-8"> <!-- Important: rapi-doc uses utf8 characters -->
    <script src="https://cdnjs.cloudflare.com/ajax/libs/rapidoc/9.3.8/rapidoc-min.js" integrity="sha512-0ES6eX4K9J1PrIEjIizv79dTlN5HwI2GW9Ku6ymb8dijMHF5CIplkS8N0iFJ/wl3GybCSqBJu8HDhiFkZRAf0g==" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  </head>
  <body>
    <rapi-doc spec-url = $specUrl
        show-method-in-nav-bar = "as-colored-text"
        use-path-in-nav-bar = "true"
    ></rapi-doc>
  </body>
</html>
"#,
    )
    .into()
}
