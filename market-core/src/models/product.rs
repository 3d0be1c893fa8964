use super::validation::{self, FieldErrors};
use super::{MarketId, MarketRecord, ProductId, SellerId, SellerRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const NEGATIVE_PRICE: &str = "Price cannot be negative.";

/// A product listed by a seller.
///
/// The read shape embeds the full seller record and the related markets;
/// write payloads reference both by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductRecord {
    /// The product's id
    pub id: ProductId,
    /// Display name; never blank
    pub name: String,
    /// Unit price; non-negative, two decimal places
    pub price: Decimal,
    /// Description; never blank
    pub description: String,
    /// The seller offering this product
    pub seller: SellerRecord,
    /// The markets this product is listed in, ordered by id
    pub markets: Vec<MarketRecord>,
    /// The size of `markets`
    pub market_count: usize,
}

impl ProductRecord {
    /// Assemble a record from scalar fields and the resolved relations.
    pub fn new(
        id: ProductId,
        name: String,
        price: Decimal,
        description: String,
        seller: SellerRecord,
        markets: Vec<MarketRecord>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            description,
            seller,
            market_count: markets.len(),
            markets,
        }
    }
}

impl std::fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

/// The validated payload for creating or fully replacing a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    /// Display name; never blank
    pub name: String,
    /// Unit price; non-negative, normalized to two decimal places
    pub price: Decimal,
    /// Description; never blank
    pub description: String,
    /// The offering seller's id
    pub seller: SellerId,
    /// The full replacement market set, de-duplicated
    pub markets: Vec<MarketId>,
}

/// A partial update for a product. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    /// Replacement name, if supplied
    pub name: Option<String>,
    /// Replacement price, if supplied
    pub price: Option<Decimal>,
    /// Replacement description, if supplied
    pub description: Option<String>,
    /// Replacement seller, if supplied
    pub seller: Option<SellerId>,
    /// Replacement market set, if supplied
    pub markets: Option<Vec<MarketId>>,
}

impl ProductPatch {
    /// Merge this patch over an existing record, yielding the full write
    /// payload. Unsupplied relations carry the existing ids forward.
    pub fn apply(self, existing: &ProductRecord) -> ProductData {
        ProductData {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            price: self.price.unwrap_or(existing.price),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            seller: self.seller.unwrap_or(existing.seller.id),
            markets: self
                .markets
                .unwrap_or_else(|| existing.markets.iter().map(|m| m.id).collect()),
        }
    }
}

/// The raw write payload for a product, prior to validation.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct ProductDto {
    /// Display name; required, non-blank
    pub name: Option<String>,
    /// Unit price as a string or number; required, non-negative
    pub price: Option<Decimal>,
    /// Description; required, non-blank
    pub description: Option<String>,
    /// Market ids; required on create and full update. The historical
    /// `markets_ids` spelling is accepted as an alias.
    #[serde(alias = "markets_ids")]
    pub markets: Option<Vec<MarketId>>,
    /// The offering seller's id; required. The historical `seller_id`
    /// spelling is accepted as an alias.
    #[serde(alias = "seller_id")]
    pub seller: Option<SellerId>,
}

impl TryFrom<ProductDto> for ProductData {
    type Error = FieldErrors;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();
        let name = validation::required_string(dto.name, "name", &mut errors);
        let price = validation::required_decimal(dto.price, "price", NEGATIVE_PRICE, &mut errors);
        let description = validation::required_string(dto.description, "description", &mut errors);
        let markets = validation::required(dto.markets, "markets", &mut errors);
        let seller = validation::required(dto.seller, "seller", &mut errors);

        match (name, price, description, markets, seller) {
            (Some(name), Some(price), Some(description), Some(markets), Some(seller)) => Ok(Self {
                name,
                price,
                description,
                seller,
                markets: validation::dedupe_ids(markets),
            }),
            _ => Err(errors),
        }
    }
}

impl TryFrom<ProductDto> for ProductPatch {
    type Error = FieldErrors;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();
        let name = dto
            .name
            .and_then(|name| validation::non_blank_string(name, "name", &mut errors));
        let price = dto
            .price
            .and_then(|value| validation::checked_decimal(value, "price", NEGATIVE_PRICE, &mut errors));
        let description = dto
            .description
            .and_then(|value| validation::non_blank_string(value, "description", &mut errors));
        let markets = dto.markets.map(validation::dedupe_ids);

        errors.into_result(Self {
            name,
            price,
            description,
            seller: dto.seller,
            markets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(value: serde_json::Value) -> ProductDto {
        serde_json::from_value(value).unwrap()
    }

    fn sample_seller() -> SellerRecord {
        SellerRecord::new(
            SellerId(1),
            "John Doe".into(),
            "john.doe@example.com, +49 123 456 789".into(),
            Vec::new(),
        )
    }

    #[test]
    fn full_payload_validates() {
        let data = ProductData::try_from(dto(serde_json::json!({
            "name": "Organic Apples",
            "description": "Fresh organic apples from local farms.",
            "price": 3.50,
            "markets": [1],
            "seller": 1
        })))
        .unwrap();

        assert_eq!(data.name, "Organic Apples");
        assert_eq!(data.price.to_string(), "3.50");
        assert_eq!(data.seller, SellerId(1));
        assert_eq!(data.markets, vec![MarketId(1)]);
    }

    #[test]
    fn historical_key_spellings_are_accepted() {
        let data = ProductData::try_from(dto(serde_json::json!({
            "name": "Handmade Baskets",
            "description": "Beautiful handmade baskets for daily use.",
            "price": "15.00",
            "markets_ids": [1],
            "seller_id": 1
        })))
        .unwrap();
        assert_eq!(data.seller, SellerId(1));
        assert_eq!(data.markets, vec![MarketId(1)]);
    }

    #[test]
    fn blank_description_is_rejected() {
        let errors = ProductData::try_from(dto(serde_json::json!({
            "name": "Invalid Product",
            "description": "",
            "price": 10.00,
            "markets": [1],
            "seller": 1
        })))
        .unwrap_err();
        assert_eq!(
            errors.get("description").unwrap(),
            &vec!["This field may not be blank.".to_owned()]
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        let errors = ProductData::try_from(dto(serde_json::json!({
            "name": "Invalid Product",
            "description": "Valid description",
            "price": -10.00,
            "markets": [1],
            "seller": 1
        })))
        .unwrap_err();
        assert_eq!(
            errors.get("price").unwrap(),
            &vec!["Price cannot be negative.".to_owned()]
        );
    }

    #[test]
    fn missing_seller_is_reported() {
        let errors = ProductData::try_from(dto(serde_json::json!({
            "name": "P",
            "description": "D",
            "price": 1,
            "markets": []
        })))
        .unwrap_err();
        assert_eq!(
            errors.get("seller").unwrap(),
            &vec!["This field is required.".to_owned()]
        );
    }

    #[test]
    fn patch_apply_merges_over_existing() {
        let existing = ProductRecord::new(
            ProductId(4),
            "Organic Apples".into(),
            Decimal::new(350, 2),
            "Fresh organic apples from local farms.".into(),
            sample_seller(),
            Vec::new(),
        );

        let merged = ProductPatch {
            price: Some(Decimal::new(2000, 2)),
            ..Default::default()
        }
        .apply(&existing);
        assert_eq!(merged.name, "Organic Apples");
        assert_eq!(merged.price.to_string(), "20.00");
        assert_eq!(merged.seller, SellerId(1));
        assert!(merged.markets.is_empty());
    }

    #[test]
    fn displays_as_name_and_price() {
        let product = ProductRecord::new(
            ProductId(4),
            "Organic Apples".into(),
            Decimal::new(350, 2),
            "Fresh organic apples from local farms.".into(),
            sample_seller(),
            Vec::new(),
        );
        assert_eq!(product.to_string(), "Organic Apples (3.50)");
    }
}
