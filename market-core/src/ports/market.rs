use crate::models::{MarketData, MarketId, MarketPatch, MarketRecord};
use std::future::Future;

/// Domain failures for market writes. Reads report a missing row as `None`
/// instead; markets have no relation fields of their own, so the only way a
/// write can fail is by targeting a row that is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketFailure {
    /// The targeted market does not exist
    DoesNotExist,
}

/// Storage operations for markets.
pub trait MarketRepository: super::Repository {
    /// All markets, ordered by id.
    fn list_markets(&self) -> impl Future<Output = Result<Vec<MarketRecord>, Self::Error>> + Send;

    /// Get the record for the requested market, if it exists.
    fn get_market(
        &self,
        market_id: MarketId,
    ) -> impl Future<Output = Result<Option<MarketRecord>, Self::Error>> + Send;

    /// Create a new market, allocating its id.
    fn create_market(
        &self,
        data: MarketData,
    ) -> impl Future<Output = Result<MarketRecord, Self::Error>> + Send;

    /// Replace every scalar field of an existing market.
    fn update_market(
        &self,
        market_id: MarketId,
        data: MarketData,
    ) -> impl Future<Output = Result<Result<MarketRecord, MarketFailure>, Self::Error>> + Send;

    /// Merge a partial update over an existing market.
    fn patch_market(
        &self,
        market_id: MarketId,
        patch: MarketPatch,
    ) -> impl Future<Output = Result<Result<MarketRecord, MarketFailure>, Self::Error>> + Send;

    /// Delete the market. Join rows referencing it are removed; the sellers
    /// and products they pointed at are kept.
    fn delete_market(
        &self,
        market_id: MarketId,
    ) -> impl Future<Output = Result<Result<(), MarketFailure>, Self::Error>> + Send;
}
