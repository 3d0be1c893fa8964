//! Repository trait implementations for the SQLite database, one module per
//! entity, plus the small query helpers they share.

use crate::Db;
use crate::types::{MarketRow, OwnedMarketRow, SellerRow};
use market_core::{
    models::{MarketId, MarketRecord, SellerId, SellerRecord},
    ports::{MarketplaceRepository, Repository},
};
use std::collections::HashMap;

mod market;
mod product;
mod seller;

impl Repository for Db {
    type Error = sqlx::Error;
}

impl MarketplaceRepository for Db {}

/// Serialize ids into the shape `json_each` expects as its argument.
pub(crate) fn ids_param<T: serde::Serialize>(ids: &[T]) -> Result<String, sqlx::Error> {
    serde_json::to_string(ids).map_err(|err| sqlx::Error::Encode(Box::new(err)))
}

/// The full market records for the given ids, ordered by id.
pub(crate) async fn markets_by_ids<'c, E>(
    executor: E,
    ids: &[MarketId],
) -> Result<Vec<MarketRecord>, sqlx::Error>
where
    E: sqlx::SqliteExecutor<'c>,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<MarketRow> = sqlx::query_as(
        r#"
        select id, name, location, description, net_worth
        from market
        where id in (select value from json_each($1))
        order by id
        "#,
    )
    .bind(ids_param(ids)?)
    .fetch_all(executor)
    .await?;
    rows.into_iter().map(MarketRow::into_record).collect()
}

/// Check that every id names a market row, returning the first missing id in
/// supplied order otherwise. Runs on the write transaction so the check and
/// the join-row inserts see the same state.
pub(crate) async fn missing_market<'c, E>(
    executor: E,
    ids: &[MarketId],
) -> Result<Option<MarketId>, sqlx::Error>
where
    E: sqlx::SqliteExecutor<'c>,
{
    if ids.is_empty() {
        return Ok(None);
    }
    let found: Vec<i64> =
        sqlx::query_scalar("select id from market where id in (select value from json_each($1))")
            .bind(ids_param(ids)?)
            .fetch_all(executor)
            .await?;
    if found.len() == ids.len() {
        Ok(None)
    } else {
        let found: std::collections::HashSet<i64> = found.into_iter().collect();
        Ok(ids.iter().copied().find(|id| !found.contains(&id.0)))
    }
}

/// Markets joined through `seller_market`, grouped by seller.
pub(crate) async fn seller_markets<'c, E>(
    executor: E,
    seller_ids: &[SellerId],
) -> Result<HashMap<i64, Vec<MarketRecord>>, sqlx::Error>
where
    E: sqlx::SqliteExecutor<'c>,
{
    if seller_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows: Vec<OwnedMarketRow> = sqlx::query_as(
        r#"
        select sm.seller_id as owner_id, m.id, m.name, m.location, m.description, m.net_worth
        from seller_market sm
        join market m on m.id = sm.market_id
        where sm.seller_id in (select value from json_each($1))
        order by sm.seller_id, m.id
        "#,
    )
    .bind(ids_param(seller_ids)?)
    .fetch_all(executor)
    .await?;
    group_by_owner(rows)
}

/// Markets joined through `product_market`, grouped by product.
pub(crate) async fn product_markets<'c, E>(
    executor: E,
    product_ids: &[market_core::models::ProductId],
) -> Result<HashMap<i64, Vec<MarketRecord>>, sqlx::Error>
where
    E: sqlx::SqliteExecutor<'c>,
{
    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows: Vec<OwnedMarketRow> = sqlx::query_as(
        r#"
        select pm.product_id as owner_id, m.id, m.name, m.location, m.description, m.net_worth
        from product_market pm
        join market m on m.id = pm.market_id
        where pm.product_id in (select value from json_each($1))
        order by pm.product_id, m.id
        "#,
    )
    .bind(ids_param(product_ids)?)
    .fetch_all(executor)
    .await?;
    group_by_owner(rows)
}

fn group_by_owner(
    rows: Vec<OwnedMarketRow>,
) -> Result<HashMap<i64, Vec<MarketRecord>>, sqlx::Error> {
    let mut map: HashMap<i64, Vec<MarketRecord>> = HashMap::new();
    for row in rows {
        map.entry(row.owner_id)
            .or_default()
            .push(row.market.into_record()?);
    }
    Ok(map)
}

/// A single seller with its markets resolved, or `None` if the row is gone.
pub(crate) async fn seller_by_id(
    conn: &mut sqlx::SqliteConnection,
    seller_id: SellerId,
) -> Result<Option<SellerRecord>, sqlx::Error> {
    let row: Option<SellerRow> =
        sqlx::query_as("select id, name, contact_info from seller where id = $1")
            .bind(seller_id.0)
            .fetch_optional(&mut *conn)
            .await?;
    let Some(row) = row else {
        return Ok(None);
    };
    let mut markets = seller_markets(&mut *conn, &[seller_id]).await?;
    let markets = markets.remove(&row.id).unwrap_or_default();
    Ok(Some(row.into_record(markets)))
}

/// Full seller records for the given ids, ordered by id.
pub(crate) async fn sellers_by_ids(
    conn: &mut sqlx::SqliteConnection,
    ids: &[SellerId],
) -> Result<Vec<SellerRecord>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<SellerRow> = sqlx::query_as(
        r#"
        select id, name, contact_info
        from seller
        where id in (select value from json_each($1))
        order by id
        "#,
    )
    .bind(ids_param(ids)?)
    .fetch_all(&mut *conn)
    .await?;
    let mut markets = seller_markets(&mut *conn, ids).await?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let market_set = markets.remove(&row.id).unwrap_or_default();
            row.into_record(market_set)
        })
        .collect())
}
