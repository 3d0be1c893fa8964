use crate::models::{MarketId, SellerData, SellerId, SellerPatch, SellerRecord};
use crate::ports::MarketRepository;
use std::future::Future;

/// Domain failures for seller writes.
///
/// Relation checks are all-or-nothing: if any market in the supplied set does
/// not exist, nothing is written and the first missing id is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellerFailure {
    /// The targeted seller does not exist
    DoesNotExist,
    /// A market in the supplied set does not exist
    UnknownMarket(MarketId),
}

/// Storage operations for sellers.
pub trait SellerRepository: MarketRepository {
    /// All sellers, ordered by id, each with its markets resolved.
    fn list_sellers(&self) -> impl Future<Output = Result<Vec<SellerRecord>, Self::Error>> + Send;

    /// Get the record for the requested seller, if it exists.
    fn get_seller(
        &self,
        seller_id: SellerId,
    ) -> impl Future<Output = Result<Option<SellerRecord>, Self::Error>> + Send;

    /// Create a new seller and its market relation rows in one transaction.
    fn create_seller(
        &self,
        data: SellerData,
    ) -> impl Future<Output = Result<Result<SellerRecord, SellerFailure>, Self::Error>> + Send;

    /// Replace the seller's scalar fields and market set. The relation rows
    /// are cleared and re-established from `data.markets`.
    fn update_seller(
        &self,
        seller_id: SellerId,
        data: SellerData,
    ) -> impl Future<Output = Result<Result<SellerRecord, SellerFailure>, Self::Error>> + Send;

    /// Merge a partial update over an existing seller. The market set is
    /// replaced only if the patch supplies one.
    fn patch_seller(
        &self,
        seller_id: SellerId,
        patch: SellerPatch,
    ) -> impl Future<Output = Result<Result<SellerRecord, SellerFailure>, Self::Error>> + Send;

    /// Delete the seller, its relation rows, and its products.
    fn delete_seller(
        &self,
        seller_id: SellerId,
    ) -> impl Future<Output = Result<Result<(), SellerFailure>, Self::Error>> + Send;
}
