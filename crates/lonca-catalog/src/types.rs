//! Raw record types for the bundled `parent_products.json` catalog export.
//!
//! ## Observed shape of the export
//!
//! ### `_id`
//! Document-store exports write identifiers either as a plain string
//! (`"65a1f0..."`) or wrapped in an extended-JSON object
//! (`{"$oid": "65a1f0..."}`). [`RawId`] accepts both and
//! [`RawId::as_str`] always yields the unwrapped string.
//!
//! ### Localized fields
//! `names` and `description_details` are keyed by locale. Only the `en`
//! locale is consumed.
//!
//! ### `vendor` / `series`
//! Nested objects; either may be absent or `null` on older records.
//!
//! ### `product_code`
//! Dash-delimited, e.g. `"ABC-001-RED"`. The leading segment groups color
//! variants of the same garment.
//!
//! ### `price` / `series.item_quantity`
//! Usually JSON numbers, but older records carry prices as strings
//! (`"12.5"`) and quantities as floats (`4.0`). Both are parsed; a value
//! that still is not a usable number deserializes to `None`.
//!
//! Every field except `_id` is optional. Absent, `null`, and missing-parent
//! cases all deserialize to `None`; defaults are applied in
//! [`crate::normalize`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single product record from the catalog export.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "_id")]
    pub id: RawId,

    #[serde(default)]
    pub names: Option<RawNames>,

    #[serde(default)]
    pub vendor: Option<RawVendor>,

    #[serde(default)]
    pub series: Option<RawSeries>,

    #[serde(default)]
    pub description_details: Option<RawDescriptionDetails>,

    #[serde(default)]
    pub main_image: Option<String>,

    /// Additional image URLs; `null` is treated like an empty list.
    #[serde(default)]
    pub images: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,

    #[serde(default)]
    pub product_code: Option<String>,
}

impl RawRecord {
    /// Builds a record with only an identifier set.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: RawId::Plain(id.into()),
            names: None,
            vendor: None,
            series: None,
            description_details: None,
            main_image: None,
            images: None,
            price: None,
            product_code: None,
        }
    }

    /// Raw product code, empty when absent.
    #[must_use]
    pub fn product_code(&self) -> &str {
        self.product_code.as_deref().unwrap_or_default()
    }
}

/// Record identifier as stored in the export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Plain(String),
    Wrapped {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl RawId {
    /// The identifier with any `$oid` wrapper removed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            RawId::Plain(id) | RawId::Wrapped { oid: id } => id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNames {
    #[serde(default)]
    pub en: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVendor {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSeries {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub item_quantity: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDescriptionDetails {
    #[serde(default)]
    pub en: Option<RawLocalizedDescription>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLocalizedDescription {
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub model_measurements: Option<String>,
    #[serde(default)]
    pub product_measurements: Option<String>,
    #[serde(default)]
    pub sample_size: Option<String>,
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|q| q.fract().abs() < f64::EPSILON && (0.0..=f64::from(u32::MAX)).contains(q))
        .map(|q| q as u32))
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}
