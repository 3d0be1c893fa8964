use indexmap::IndexMap;
use rust_decimal::Decimal;
use rustc_hash::{FxBuildHasher, FxHashSet};

pub(crate) const REQUIRED: &str = "This field is required.";
pub(crate) const BLANK: &str = "This field may not be blank.";
pub(crate) const MAX_DECIMAL_PLACES: &str = "Ensure that there are no more than 2 decimal places.";

/// The message reported when a relation field references a row that does not
/// exist. The offending id is rendered in quotes.
pub fn invalid_pk(id: impl std::fmt::Display) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

/// An insertion-ordered mapping from field name to its validation messages.
///
/// Serializes transparently as a JSON object, which is exactly the body of a
/// 400 response: fields appear in the order they were validated, each with
/// one or more human-readable messages.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, utoipa::ToSchema)]
#[serde(transparent)]
#[schema(value_type = std::collections::HashMap<String, Vec<String>>)]
pub struct FieldErrors(pub IndexMap<String, Vec<String>, FxBuildHasher>);

impl FieldErrors {
    /// Append a message to the given field's list.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// A map holding a single message for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    /// True if no field has accumulated a message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl std::ops::Deref for FieldErrors {
    type Target = IndexMap<String, Vec<String>, FxBuildHasher>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A required string field: absent is an error, as is blank-after-trim.
pub(crate) fn required_string(
    value: Option<String>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value {
        None => {
            errors.push(field, REQUIRED);
            None
        }
        Some(value) => non_blank_string(value, field, errors),
    }
}

/// A supplied string that must not be blank. Used directly by partial
/// updates, where absence means "leave unchanged" rather than an error.
pub(crate) fn non_blank_string(
    value: String,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(field, BLANK);
        None
    } else {
        Some(value.to_owned())
    }
}

/// An optional string field, trimmed, defaulting to empty when absent.
pub(crate) fn optional_string(value: Option<String>) -> String {
    value.map(|v| v.trim().to_owned()).unwrap_or_default()
}

/// A required decimal field.
pub(crate) fn required_decimal(
    value: Option<Decimal>,
    field: &str,
    negative_message: &str,
    errors: &mut FieldErrors,
) -> Option<Decimal> {
    match value {
        None => {
            errors.push(field, REQUIRED);
            None
        }
        Some(value) => checked_decimal(value, field, negative_message, errors),
    }
}

/// Scale and sign checks shared by every decimal field. Scale is checked on
/// the value as written: `3.500` is three decimal places even though it
/// equals `3.5`. Accepted values are normalized to exactly two places.
pub(crate) fn checked_decimal(
    value: Decimal,
    field: &str,
    negative_message: &str,
    errors: &mut FieldErrors,
) -> Option<Decimal> {
    if value.scale() > 2 {
        errors.push(field, MAX_DECIMAL_PLACES);
        None
    } else if value < Decimal::ZERO {
        errors.push(field, negative_message);
        None
    } else {
        let mut value = value;
        value.rescale(2);
        Some(value)
    }
}

/// A required field of any other type; no further checks.
pub(crate) fn required<T>(value: Option<T>, field: &str, errors: &mut FieldErrors) -> Option<T> {
    if value.is_none() {
        errors.push(field, REQUIRED);
    }
    value
}

/// Drop duplicate ids, keeping first-occurrence order. Relation sets are
/// keyed (owner, market) in storage, so duplicates carry no meaning.
pub(crate) fn dedupe_ids<T: Copy + Eq + std::hash::Hash>(ids: Vec<T>) -> Vec<T> {
    let mut seen = FxHashSet::default();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
