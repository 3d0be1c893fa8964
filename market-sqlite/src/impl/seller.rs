use super::{markets_by_ids, missing_market, seller_by_id, sellers_by_ids};
use crate::Db;
use market_core::{
    models::{MarketId, SellerData, SellerId, SellerPatch, SellerRecord},
    ports::{SellerFailure, SellerRepository},
};
use sqlx::QueryBuilder;

/// Insert one `seller_market` row per id. The caller has already verified
/// that every id names an existing market.
async fn link_markets(
    conn: &mut sqlx::SqliteConnection,
    seller_id: SellerId,
    markets: &[MarketId],
) -> Result<(), sqlx::Error> {
    if markets.is_empty() {
        return Ok(());
    }
    let mut builder = QueryBuilder::new("insert into seller_market (seller_id, market_id) ");
    builder.push_values(markets, |mut row, market| {
        row.push_bind(seller_id.0).push_bind(market.0);
    });
    builder.build().execute(conn).await?;
    Ok(())
}

/// Overwrite the seller's scalar row and replace its market set. Runs on the
/// caller's transaction; the caller commits on success, and a domain failure
/// rolls everything back on drop.
async fn replace_seller(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    seller_id: SellerId,
    data: SellerData,
) -> Result<Result<SellerRecord, SellerFailure>, sqlx::Error> {
    let updated: Option<i64> =
        sqlx::query_scalar("update seller set name = $2, contact_info = $3 where id = $1 returning id")
            .bind(seller_id.0)
            .bind(&data.name)
            .bind(&data.contact_info)
            .fetch_optional(&mut **tx)
            .await?;
    if updated.is_none() {
        return Ok(Err(SellerFailure::DoesNotExist));
    }

    if let Some(missing) = missing_market(&mut **tx, &data.markets).await? {
        return Ok(Err(SellerFailure::UnknownMarket(missing)));
    }
    sqlx::query("delete from seller_market where seller_id = $1")
        .bind(seller_id.0)
        .execute(&mut **tx)
        .await?;
    link_markets(&mut *tx, seller_id, &data.markets).await?;

    let markets = markets_by_ids(&mut **tx, &data.markets).await?;
    Ok(Ok(SellerRecord::new(
        seller_id,
        data.name,
        data.contact_info,
        markets,
    )))
}

impl SellerRepository for Db {
    async fn list_sellers(&self) -> Result<Vec<SellerRecord>, Self::Error> {
        let mut conn = self.reader.acquire().await?;
        let ids: Vec<i64> = sqlx::query_scalar("select id from seller order by id")
            .fetch_all(&mut *conn)
            .await?;
        let ids: Vec<SellerId> = ids.into_iter().map(SellerId).collect();
        sellers_by_ids(&mut conn, &ids).await
    }

    async fn get_seller(&self, seller_id: SellerId) -> Result<Option<SellerRecord>, Self::Error> {
        let mut conn = self.reader.acquire().await?;
        seller_by_id(&mut conn, seller_id).await
    }

    async fn create_seller(
        &self,
        data: SellerData,
    ) -> Result<Result<SellerRecord, SellerFailure>, Self::Error> {
        let mut tx = self.writer.begin().await?;

        if let Some(missing) = missing_market(&mut *tx, &data.markets).await? {
            return Ok(Err(SellerFailure::UnknownMarket(missing)));
        }
        let id: i64 =
            sqlx::query_scalar("insert into seller (name, contact_info) values ($1, $2) returning id")
                .bind(&data.name)
                .bind(&data.contact_info)
                .fetch_one(&mut *tx)
                .await?;
        let seller_id = SellerId(id);
        link_markets(&mut tx, seller_id, &data.markets).await?;

        let markets = markets_by_ids(&mut *tx, &data.markets).await?;
        tx.commit().await?;

        Ok(Ok(SellerRecord::new(
            seller_id,
            data.name,
            data.contact_info,
            markets,
        )))
    }

    async fn update_seller(
        &self,
        seller_id: SellerId,
        data: SellerData,
    ) -> Result<Result<SellerRecord, SellerFailure>, Self::Error> {
        let mut tx = self.writer.begin().await?;
        let result = replace_seller(&mut tx, seller_id, data).await?;
        if result.is_ok() {
            tx.commit().await?;
        }
        Ok(result)
    }

    async fn patch_seller(
        &self,
        seller_id: SellerId,
        patch: SellerPatch,
    ) -> Result<Result<SellerRecord, SellerFailure>, Self::Error> {
        let mut tx = self.writer.begin().await?;

        let Some(existing) = seller_by_id(&mut tx, seller_id).await? else {
            return Ok(Err(SellerFailure::DoesNotExist));
        };
        let result = replace_seller(&mut tx, seller_id, patch.apply(&existing)).await?;
        if result.is_ok() {
            tx.commit().await?;
        }
        Ok(result)
    }

    async fn delete_seller(
        &self,
        seller_id: SellerId,
    ) -> Result<Result<(), SellerFailure>, Self::Error> {
        // The seller's join rows and products go with it via the FK cascades.
        let result = sqlx::query("delete from seller where id = $1")
            .bind(seller_id.0)
            .execute(&self.writer)
            .await?;
        Ok(if result.rows_affected() == 0 {
            Err(SellerFailure::DoesNotExist)
        } else {
            Ok(())
        })
    }
}
