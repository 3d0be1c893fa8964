//! Internal row types mapping table columns onto the core records.

use market_core::models::{MarketId, MarketRecord, ProductId, ProductRecord, SellerId, SellerRecord};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a stored decimal column. The writers only ever store canonical
/// strings, so a failure here means the column was tampered with; it surfaces
/// as a decode error rather than a domain failure.
pub(crate) fn decimal_column(text: &str, index: &str) -> Result<Decimal, sqlx::Error> {
    Decimal::from_str(text).map_err(|err| sqlx::Error::ColumnDecode {
        index: index.to_owned(),
        source: Box::new(err),
    })
}

#[derive(sqlx::FromRow)]
pub(crate) struct MarketRow {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: String,
    pub net_worth: String,
}

impl MarketRow {
    pub fn into_record(self) -> Result<MarketRecord, sqlx::Error> {
        Ok(MarketRecord {
            id: MarketId(self.id),
            name: self.name,
            location: self.location,
            description: self.description,
            net_worth: decimal_column(&self.net_worth, "net_worth")?,
        })
    }
}

/// A market joined through one of the relation tables, tagged with the
/// owning row's id so results can be grouped per owner.
#[derive(sqlx::FromRow)]
pub(crate) struct OwnedMarketRow {
    pub owner_id: i64,
    #[sqlx(flatten)]
    pub market: MarketRow,
}

#[derive(sqlx::FromRow)]
pub(crate) struct SellerRow {
    pub id: i64,
    pub name: String,
    pub contact_info: String,
}

impl SellerRow {
    pub fn into_record(self, markets: Vec<MarketRecord>) -> SellerRecord {
        SellerRecord::new(SellerId(self.id), self.name, self.contact_info, markets)
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub description: String,
    pub seller_id: i64,
}

impl ProductRow {
    pub fn into_record(
        self,
        seller: SellerRecord,
        markets: Vec<MarketRecord>,
    ) -> Result<ProductRecord, sqlx::Error> {
        Ok(ProductRecord::new(
            ProductId(self.id),
            self.name,
            decimal_column(&self.price, "price")?,
            self.description,
            seller,
            markets,
        ))
    }
}
