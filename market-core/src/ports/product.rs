use crate::models::{MarketId, ProductData, ProductId, ProductPatch, ProductRecord, SellerId};
use crate::ports::SellerRepository;
use std::future::Future;

/// Domain failures for product writes.
///
/// The seller reference is checked before the market set; either check
/// failing aborts the whole write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFailure {
    /// The targeted product does not exist
    DoesNotExist,
    /// The referenced seller does not exist
    UnknownSeller(SellerId),
    /// A market in the supplied set does not exist
    UnknownMarket(MarketId),
}

/// Storage operations for products.
pub trait ProductRepository: SellerRepository {
    /// All products, ordered by id, each with its seller and markets resolved.
    fn list_products(&self)
    -> impl Future<Output = Result<Vec<ProductRecord>, Self::Error>> + Send;

    /// Get the record for the requested product, if it exists.
    fn get_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Option<ProductRecord>, Self::Error>> + Send;

    /// Create a new product and its market relation rows in one transaction.
    fn create_product(
        &self,
        data: ProductData,
    ) -> impl Future<Output = Result<Result<ProductRecord, ProductFailure>, Self::Error>> + Send;

    /// Replace the product's scalar fields, seller reference, and market set.
    fn update_product(
        &self,
        product_id: ProductId,
        data: ProductData,
    ) -> impl Future<Output = Result<Result<ProductRecord, ProductFailure>, Self::Error>> + Send;

    /// Merge a partial update over an existing product. The market set is
    /// replaced only if the patch supplies one.
    fn patch_product(
        &self,
        product_id: ProductId,
        patch: ProductPatch,
    ) -> impl Future<Output = Result<Result<ProductRecord, ProductFailure>, Self::Error>> + Send;

    /// Delete the product and its relation rows.
    fn delete_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Result<(), ProductFailure>, Self::Error>> + Send;
}
