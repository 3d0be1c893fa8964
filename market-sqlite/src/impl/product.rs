use super::{markets_by_ids, missing_market, product_markets, seller_by_id, sellers_by_ids};
use crate::Db;
use crate::types::ProductRow;
use market_core::{
    models::{MarketId, ProductData, ProductId, ProductPatch, ProductRecord, SellerId, SellerRecord},
    ports::{ProductFailure, ProductRepository},
};
use sqlx::QueryBuilder;
use std::collections::HashMap;

/// Insert one `product_market` row per id. The caller has already verified
/// that every id names an existing market.
async fn link_markets(
    conn: &mut sqlx::SqliteConnection,
    product_id: ProductId,
    markets: &[MarketId],
) -> Result<(), sqlx::Error> {
    if markets.is_empty() {
        return Ok(());
    }
    let mut builder = QueryBuilder::new("insert into product_market (product_id, market_id) ");
    builder.push_values(markets, |mut row, market| {
        row.push_bind(product_id.0).push_bind(market.0);
    });
    builder.build().execute(conn).await?;
    Ok(())
}

/// A single product with its seller and markets resolved, or `None` if the
/// row is gone. The seller lookup cannot miss while the row exists; the
/// foreign key guarantees it.
async fn product_by_id(
    conn: &mut sqlx::SqliteConnection,
    product_id: ProductId,
) -> Result<Option<ProductRecord>, sqlx::Error> {
    let row: Option<ProductRow> = sqlx::query_as(
        "select id, name, price, description, seller_id from product where id = $1",
    )
    .bind(product_id.0)
    .fetch_optional(&mut *conn)
    .await?;
    let Some(row) = row else {
        return Ok(None);
    };
    let seller = seller_by_id(&mut *conn, SellerId(row.seller_id))
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;
    let mut markets = product_markets(&mut *conn, &[product_id]).await?;
    let markets = markets.remove(&row.id).unwrap_or_default();
    Ok(Some(row.into_record(seller, markets)?))
}

/// Overwrite the product's scalar row and replace its market set. Runs on
/// the caller's transaction; the caller commits on success.
async fn replace_product(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    product_id: ProductId,
    data: ProductData,
) -> Result<Result<ProductRecord, ProductFailure>, sqlx::Error> {
    let Some(seller) = seller_by_id(&mut *tx, data.seller).await? else {
        return Ok(Err(ProductFailure::UnknownSeller(data.seller)));
    };
    if let Some(missing) = missing_market(&mut **tx, &data.markets).await? {
        return Ok(Err(ProductFailure::UnknownMarket(missing)));
    }

    let updated: Option<i64> = sqlx::query_scalar(
        r#"
        update product
        set name = $2, price = $3, description = $4, seller_id = $5
        where id = $1
        returning id
        "#,
    )
    .bind(product_id.0)
    .bind(&data.name)
    .bind(data.price.to_string())
    .bind(&data.description)
    .bind(data.seller.0)
    .fetch_optional(&mut **tx)
    .await?;
    if updated.is_none() {
        return Ok(Err(ProductFailure::DoesNotExist));
    }

    sqlx::query("delete from product_market where product_id = $1")
        .bind(product_id.0)
        .execute(&mut **tx)
        .await?;
    link_markets(&mut *tx, product_id, &data.markets).await?;

    let markets = markets_by_ids(&mut **tx, &data.markets).await?;
    Ok(Ok(ProductRecord::new(
        product_id,
        data.name,
        data.price,
        data.description,
        seller,
        markets,
    )))
}

impl ProductRepository for Db {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, Self::Error> {
        let mut conn = self.reader.acquire().await?;
        let rows: Vec<ProductRow> =
            sqlx::query_as("select id, name, price, description, seller_id from product order by id")
                .fetch_all(&mut *conn)
                .await?;

        let product_ids: Vec<ProductId> = rows.iter().map(|row| ProductId(row.id)).collect();
        let seller_ids: Vec<SellerId> = rows.iter().map(|row| SellerId(row.seller_id)).collect();
        let sellers: HashMap<i64, SellerRecord> = sellers_by_ids(&mut conn, &seller_ids)
            .await?
            .into_iter()
            .map(|seller| (seller.id.0, seller))
            .collect();
        let mut markets = product_markets(&mut *conn, &product_ids).await?;

        rows.into_iter()
            .map(|row| {
                let seller = sellers
                    .get(&row.seller_id)
                    .cloned()
                    .ok_or(sqlx::Error::RowNotFound)?;
                let market_set = markets.remove(&row.id).unwrap_or_default();
                row.into_record(seller, market_set)
            })
            .collect()
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Option<ProductRecord>, Self::Error> {
        let mut conn = self.reader.acquire().await?;
        product_by_id(&mut conn, product_id).await
    }

    async fn create_product(
        &self,
        data: ProductData,
    ) -> Result<Result<ProductRecord, ProductFailure>, Self::Error> {
        let mut tx = self.writer.begin().await?;

        let Some(seller) = seller_by_id(&mut tx, data.seller).await? else {
            return Ok(Err(ProductFailure::UnknownSeller(data.seller)));
        };
        if let Some(missing) = missing_market(&mut *tx, &data.markets).await? {
            return Ok(Err(ProductFailure::UnknownMarket(missing)));
        }

        let id: i64 = sqlx::query_scalar(
            r#"
            insert into product (name, price, description, seller_id)
            values ($1, $2, $3, $4)
            returning id
            "#,
        )
        .bind(&data.name)
        .bind(data.price.to_string())
        .bind(&data.description)
        .bind(data.seller.0)
        .fetch_one(&mut *tx)
        .await?;
        let product_id = ProductId(id);
        link_markets(&mut tx, product_id, &data.markets).await?;

        let markets = markets_by_ids(&mut *tx, &data.markets).await?;
        tx.commit().await?;

        Ok(Ok(ProductRecord::new(
            product_id,
            data.name,
            data.price,
            data.description,
            seller,
            markets,
        )))
    }

    async fn update_product(
        &self,
        product_id: ProductId,
        data: ProductData,
    ) -> Result<Result<ProductRecord, ProductFailure>, Self::Error> {
        let mut tx = self.writer.begin().await?;
        let result = replace_product(&mut tx, product_id, data).await?;
        if result.is_ok() {
            tx.commit().await?;
        }
        Ok(result)
    }

    async fn patch_product(
        &self,
        product_id: ProductId,
        patch: ProductPatch,
    ) -> Result<Result<ProductRecord, ProductFailure>, Self::Error> {
        let mut tx = self.writer.begin().await?;

        let Some(existing) = product_by_id(&mut tx, product_id).await? else {
            return Ok(Err(ProductFailure::DoesNotExist));
        };
        let result = replace_product(&mut tx, product_id, patch.apply(&existing)).await?;
        if result.is_ok() {
            tx.commit().await?;
        }
        Ok(result)
    }

    async fn delete_product(
        &self,
        product_id: ProductId,
    ) -> Result<Result<(), ProductFailure>, Self::Error> {
        let result = sqlx::query("delete from product where id = $1")
            .bind(product_id.0)
            .execute(&self.writer)
            .await?;
        Ok(if result.rows_affected() == 0 {
            Err(ProductFailure::DoesNotExist)
        } else {
            Ok(())
        })
    }
}
