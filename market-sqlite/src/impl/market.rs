use crate::Db;
use crate::types::MarketRow;
use market_core::{
    models::{MarketData, MarketId, MarketPatch, MarketRecord},
    ports::{MarketFailure, MarketRepository},
};

fn record(id: MarketId, data: MarketData) -> MarketRecord {
    MarketRecord {
        id,
        name: data.name,
        location: data.location,
        description: data.description,
        net_worth: data.net_worth,
    }
}

impl MarketRepository for Db {
    async fn list_markets(&self) -> Result<Vec<MarketRecord>, Self::Error> {
        let rows: Vec<MarketRow> = sqlx::query_as(
            "select id, name, location, description, net_worth from market order by id",
        )
        .fetch_all(&self.reader)
        .await?;
        rows.into_iter().map(MarketRow::into_record).collect()
    }

    async fn get_market(&self, market_id: MarketId) -> Result<Option<MarketRecord>, Self::Error> {
        let row: Option<MarketRow> = sqlx::query_as(
            "select id, name, location, description, net_worth from market where id = $1",
        )
        .bind(market_id.0)
        .fetch_optional(&self.reader)
        .await?;
        row.map(MarketRow::into_record).transpose()
    }

    async fn create_market(&self, data: MarketData) -> Result<MarketRecord, Self::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            insert into market (name, location, description, net_worth)
            values ($1, $2, $3, $4)
            returning id
            "#,
        )
        .bind(&data.name)
        .bind(&data.location)
        .bind(&data.description)
        .bind(data.net_worth.to_string())
        .fetch_one(&self.writer)
        .await?;
        Ok(record(MarketId(id), data))
    }

    async fn update_market(
        &self,
        market_id: MarketId,
        data: MarketData,
    ) -> Result<Result<MarketRecord, MarketFailure>, Self::Error> {
        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            update market
            set name = $2, location = $3, description = $4, net_worth = $5
            where id = $1
            returning id
            "#,
        )
        .bind(market_id.0)
        .bind(&data.name)
        .bind(&data.location)
        .bind(&data.description)
        .bind(data.net_worth.to_string())
        .fetch_optional(&self.writer)
        .await?;

        Ok(match updated {
            Some(_) => Ok(record(market_id, data)),
            None => Err(MarketFailure::DoesNotExist),
        })
    }

    async fn patch_market(
        &self,
        market_id: MarketId,
        patch: MarketPatch,
    ) -> Result<Result<MarketRecord, MarketFailure>, Self::Error> {
        let mut tx = self.writer.begin().await?;

        let row: Option<MarketRow> = sqlx::query_as(
            "select id, name, location, description, net_worth from market where id = $1",
        )
        .bind(market_id.0)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(row) = row else {
            return Ok(Err(MarketFailure::DoesNotExist));
        };

        let data = patch.apply(&row.into_record()?);
        sqlx::query(
            r#"
            update market
            set name = $2, location = $3, description = $4, net_worth = $5
            where id = $1
            "#,
        )
        .bind(market_id.0)
        .bind(&data.name)
        .bind(&data.location)
        .bind(&data.description)
        .bind(data.net_worth.to_string())
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(Ok(record(market_id, data)))
    }

    async fn delete_market(
        &self,
        market_id: MarketId,
    ) -> Result<Result<(), MarketFailure>, Self::Error> {
        let result = sqlx::query("delete from market where id = $1")
            .bind(market_id.0)
            .execute(&self.writer)
            .await?;
        Ok(if result.rows_affected() == 0 {
            Err(MarketFailure::DoesNotExist)
        } else {
            Ok(())
        })
    }
}
