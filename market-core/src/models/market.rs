use super::MarketId;
use super::validation::{self, FieldErrors};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const NEGATIVE_NET_WORTH: &str = "Net worth cannot be negative.";

/// A marketplace venue.
///
/// This is the read shape: everything a GET response contains for a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MarketRecord {
    /// The market's id
    pub id: MarketId,
    /// Display name; never blank
    pub name: String,
    /// Free-form location text
    pub location: String,
    /// Free-form description text
    pub description: String,
    /// Estimated net worth; non-negative, two decimal places
    pub net_worth: Decimal,
}

impl std::fmt::Display for MarketRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}

/// The validated payload for creating or fully replacing a market.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketData {
    /// Display name; never blank
    pub name: String,
    /// Free-form location text
    pub location: String,
    /// Free-form description text
    pub description: String,
    /// Estimated net worth; non-negative, normalized to two decimal places
    pub net_worth: Decimal,
}

/// A partial update for a market. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketPatch {
    /// Replacement name, if supplied
    pub name: Option<String>,
    /// Replacement location, if supplied
    pub location: Option<String>,
    /// Replacement description, if supplied
    pub description: Option<String>,
    /// Replacement net worth, if supplied
    pub net_worth: Option<Decimal>,
}

impl MarketPatch {
    /// Merge this patch over an existing record, yielding the full write
    /// payload for the row.
    pub fn apply(self, existing: &MarketRecord) -> MarketData {
        MarketData {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            location: self.location.unwrap_or_else(|| existing.location.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            net_worth: self.net_worth.unwrap_or(existing.net_worth),
        }
    }
}

/// The raw write payload for a market, prior to validation.
///
/// Every field is optional at the serde layer so that a missing or unusable
/// field surfaces as a per-field message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct MarketDto {
    /// Display name; required, non-blank
    pub name: Option<String>,
    /// Free-form location text; defaults to empty
    pub location: Option<String>,
    /// Free-form description text; defaults to empty
    pub description: Option<String>,
    /// Net worth as a string or number; required, non-negative
    pub net_worth: Option<Decimal>,
}

impl TryFrom<MarketDto> for MarketData {
    type Error = FieldErrors;

    fn try_from(dto: MarketDto) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();
        let name = validation::required_string(dto.name, "name", &mut errors);
        let location = validation::optional_string(dto.location);
        let description = validation::optional_string(dto.description);
        let net_worth =
            validation::required_decimal(dto.net_worth, "net_worth", NEGATIVE_NET_WORTH, &mut errors);

        if let (Some(name), Some(net_worth)) = (name, net_worth) {
            Ok(Self {
                name,
                location,
                description,
                net_worth,
            })
        } else {
            Err(errors)
        }
    }
}

impl TryFrom<MarketDto> for MarketPatch {
    type Error = FieldErrors;

    fn try_from(dto: MarketDto) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();
        let name = dto
            .name
            .and_then(|name| validation::non_blank_string(name, "name", &mut errors));
        let location = dto.location.map(|v| v.trim().to_owned());
        let description = dto.description.map(|v| v.trim().to_owned());
        let net_worth = dto.net_worth.and_then(|value| {
            validation::checked_decimal(value, "net_worth", NEGATIVE_NET_WORTH, &mut errors)
        });

        errors.into_result(Self {
            name,
            location,
            description,
            net_worth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(value: serde_json::Value) -> MarketDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn full_payload_validates_and_normalizes() {
        let data = MarketData::try_from(dto(serde_json::json!({
            "name": "  Central Market ",
            "location": "Berlin, Germany",
            "net_worth": "5000000"
        })))
        .unwrap();

        assert_eq!(data.name, "Central Market");
        assert_eq!(data.location, "Berlin, Germany");
        assert_eq!(data.description, "");
        assert_eq!(data.net_worth.to_string(), "5000000.00");
    }

    #[test]
    fn net_worth_accepts_numbers_and_strings() {
        let from_number = MarketData::try_from(dto(serde_json::json!({
            "name": "A", "net_worth": 1200000.5
        })))
        .unwrap();
        let from_string = MarketData::try_from(dto(serde_json::json!({
            "name": "A", "net_worth": "1200000.50"
        })))
        .unwrap();
        assert_eq!(from_number.net_worth, from_string.net_worth);
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let errors = MarketData::try_from(dto(serde_json::json!({}))).unwrap_err();
        assert_eq!(errors.get("name").unwrap(), &vec!["This field is required.".to_owned()]);
        assert_eq!(
            errors.get("net_worth").unwrap(),
            &vec!["This field is required.".to_owned()]
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = MarketData::try_from(dto(serde_json::json!({
            "name": "   ",
            "net_worth": "100000.00"
        })))
        .unwrap_err();
        assert_eq!(
            errors.get("name").unwrap(),
            &vec!["This field may not be blank.".to_owned()]
        );
        assert!(errors.get("net_worth").is_none());
    }

    #[test]
    fn negative_net_worth_is_rejected() {
        let errors = MarketData::try_from(dto(serde_json::json!({
            "name": "Invalid Market",
            "net_worth": "-1000.00"
        })))
        .unwrap_err();
        assert_eq!(
            errors.get("net_worth").unwrap(),
            &vec!["Net worth cannot be negative.".to_owned()]
        );
    }

    #[test]
    fn excess_decimal_places_are_rejected() {
        let errors = MarketData::try_from(dto(serde_json::json!({
            "name": "Market",
            "net_worth": "10.555"
        })))
        .unwrap_err();
        assert_eq!(
            errors.get("net_worth").unwrap(),
            &vec!["Ensure that there are no more than 2 decimal places.".to_owned()]
        );
    }

    #[test]
    fn patch_keeps_unsupplied_fields() {
        let patch = MarketPatch::try_from(dto(serde_json::json!({
            "description": "X"
        })))
        .unwrap();
        assert!(patch.name.is_none());
        assert_eq!(patch.description.as_deref(), Some("X"));

        let existing = MarketRecord {
            id: MarketId(1),
            name: "Downtown Market".into(),
            location: "Munich, Germany".into(),
            description: "A popular market in the city center.".into(),
            net_worth: Decimal::new(120000050, 2),
        };
        let merged = patch.apply(&existing);
        assert_eq!(merged.name, "Downtown Market");
        assert_eq!(merged.description, "X");
        assert_eq!(merged.net_worth, existing.net_worth);
    }

    #[test]
    fn patch_rejects_blank_name() {
        let errors = MarketPatch::try_from(dto(serde_json::json!({ "name": "" }))).unwrap_err();
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn displays_as_its_name() {
        let market = MarketRecord {
            id: MarketId(1),
            name: "Downtown Market".into(),
            location: String::new(),
            description: String::new(),
            net_worth: Decimal::ZERO,
        };
        assert_eq!(market.to_string(), "Downtown Market");
    }
}
