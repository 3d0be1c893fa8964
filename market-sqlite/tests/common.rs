use market_core::models::{MarketData, MarketId, ProductData, SellerData, SellerId};
use market_sqlite::{Db, config::SqliteConfig};
use rust_decimal::Decimal;
use std::str::FromStr;

pub async fn open() -> anyhow::Result<Db> {
    Ok(Db::open(&SqliteConfig::default()).await?)
}

pub fn decimal(text: &str) -> Decimal {
    Decimal::from_str(text).unwrap()
}

pub fn market(name: &str) -> MarketData {
    MarketData {
        name: name.into(),
        location: "Berlin, Germany".into(),
        description: "A popular market in the city center.".into(),
        net_worth: decimal("5000000.00"),
    }
}

pub fn seller(name: &str, markets: Vec<MarketId>) -> SellerData {
    SellerData {
        name: name.into(),
        contact_info: "seller@example.com".into(),
        markets,
    }
}

pub fn product(name: &str, seller: SellerId, markets: Vec<MarketId>) -> ProductData {
    ProductData {
        name: name.into(),
        price: decimal("3.50"),
        description: "Fresh organic apples from local farms.".into(),
        seller,
        markets,
    }
}
