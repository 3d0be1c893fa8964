mod market;
mod product;
mod seller;

pub use market::{MarketFailure, MarketRepository};
pub use product::{ProductFailure, ProductRepository};
pub use seller::{SellerFailure, SellerRepository};

/// The supertrait shared by every repository port.
///
/// An adapter picks a single infrastructure error type here; domain-level
/// failures (missing rows, unknown relation ids) travel separately in each
/// operation's inner `Result`, so callers can tell "the database broke" apart
/// from "the request named something that does not exist".
pub trait Repository: Clone + Send + Sync + 'static {
    /// The adapter's infrastructure error
    type Error: std::error::Error + Send + Sync + 'static;
}

/// The "marker" trait that is used everywhere and implies implementation of all the above
pub trait MarketplaceRepository: ProductRepository {}
