use super::validation::{self, FieldErrors};
use super::{MarketId, MarketRecord, SellerId};
use serde::{Deserialize, Serialize};

/// A seller and the markets it operates in.
///
/// The read shape denormalizes the related markets inline and carries a
/// convenience count; write payloads reference markets by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SellerRecord {
    /// The seller's id
    pub id: SellerId,
    /// Display name; never blank
    pub name: String,
    /// Free-form contact details
    pub contact_info: String,
    /// The seller's markets, ordered by id
    pub markets: Vec<MarketRecord>,
    /// The size of `markets`
    pub market_count: usize,
}

impl SellerRecord {
    /// Assemble a record from scalar fields and the resolved market set.
    pub fn new(id: SellerId, name: String, contact_info: String, markets: Vec<MarketRecord>) -> Self {
        Self {
            id,
            name,
            contact_info,
            market_count: markets.len(),
            markets,
        }
    }
}

impl std::fmt::Display for SellerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}

/// The validated payload for creating or fully replacing a seller.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerData {
    /// Display name; never blank
    pub name: String,
    /// Free-form contact details
    pub contact_info: String,
    /// The full replacement market set, de-duplicated
    pub markets: Vec<MarketId>,
}

/// A partial update for a seller. `None` fields are left untouched; in
/// particular, an absent `markets` leaves the relation rows alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerPatch {
    /// Replacement name, if supplied
    pub name: Option<String>,
    /// Replacement contact details, if supplied
    pub contact_info: Option<String>,
    /// Replacement market set, if supplied
    pub markets: Option<Vec<MarketId>>,
}

impl SellerPatch {
    /// Merge this patch over an existing record, yielding the full write
    /// payload. An unsupplied market set carries the existing ids forward.
    pub fn apply(self, existing: &SellerRecord) -> SellerData {
        SellerData {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            contact_info: self
                .contact_info
                .unwrap_or_else(|| existing.contact_info.clone()),
            markets: self
                .markets
                .unwrap_or_else(|| existing.markets.iter().map(|m| m.id).collect()),
        }
    }
}

/// The raw write payload for a seller, prior to validation.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct SellerDto {
    /// Display name; required, non-blank
    pub name: Option<String>,
    /// Free-form contact details; defaults to empty
    pub contact_info: Option<String>,
    /// Market ids; required on create and full update. The historical
    /// `markets_ids` spelling is accepted as an alias.
    #[serde(alias = "markets_ids")]
    pub markets: Option<Vec<MarketId>>,
}

impl TryFrom<SellerDto> for SellerData {
    type Error = FieldErrors;

    fn try_from(dto: SellerDto) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();
        let name = validation::required_string(dto.name, "name", &mut errors);
        let contact_info = validation::optional_string(dto.contact_info);
        let markets = validation::required(dto.markets, "markets", &mut errors);

        if let (Some(name), Some(markets)) = (name, markets) {
            Ok(Self {
                name,
                contact_info,
                markets: validation::dedupe_ids(markets),
            })
        } else {
            Err(errors)
        }
    }
}

impl TryFrom<SellerDto> for SellerPatch {
    type Error = FieldErrors;

    fn try_from(dto: SellerDto) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();
        let name = dto
            .name
            .and_then(|name| validation::non_blank_string(name, "name", &mut errors));
        let contact_info = dto.contact_info.map(|v| v.trim().to_owned());
        let markets = dto.markets.map(validation::dedupe_ids);

        errors.into_result(Self {
            name,
            contact_info,
            markets,
        })
    }
}
