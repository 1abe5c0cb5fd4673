//! Normalization from raw export records to [`lonca_core::Product`].
//!
//! Normalization is total: every optional field has a default, so any
//! record that deserialized successfully produces a product.

use lonca_core::{DescriptionDetails, Product, DEFAULT_PRODUCT_NAME, DEFAULT_VENDOR_NAME};

use crate::types::{RawLocalizedDescription, RawRecord};

/// Normalizes a [`RawRecord`] into a [`Product`], applying defaults to every
/// absent field.
#[must_use]
pub fn normalize_record(record: &RawRecord) -> Product {
    let name = record
        .names
        .as_ref()
        .and_then(|names| names.en.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string());

    let vendor_name = record
        .vendor
        .as_ref()
        .and_then(|vendor| vendor.name.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_VENDOR_NAME.to_string());

    let (series_name, series_item_quantity) = record
        .series
        .as_ref()
        .map(|series| {
            (
                series.name.clone().unwrap_or_default(),
                series.item_quantity.unwrap_or_default(),
            )
        })
        .unwrap_or_default();

    let description_details = record
        .description_details
        .as_ref()
        .and_then(|details| details.en.as_ref())
        .map(normalize_description)
        .unwrap_or_default();

    let color = color_from_name(&name).to_string();

    Product {
        id: record.id.as_str().to_string(),
        vendor_name,
        price: record.price.unwrap_or_default(),
        product_code: record.product_code().to_string(),
        color,
        name,
        series_name,
        series_item_quantity,
        description_details,
        main_image: record.main_image.clone().unwrap_or_default(),
        images: record.images.clone().unwrap_or_default(),
    }
}

fn normalize_description(localized: &RawLocalizedDescription) -> DescriptionDetails {
    DescriptionDetails {
        fabric: localized.fabric.clone().unwrap_or_default(),
        model_measurements: localized.model_measurements.clone().unwrap_or_default(),
        product_measurements: localized.product_measurements.clone().unwrap_or_default(),
        sample_size: localized.sample_size.clone().unwrap_or_default(),
    }
}

/// Extracts the color from a `"family - variant - color"` name: the trimmed
/// last dash-delimited segment when the name has more than two segments.
#[must_use]
pub fn color_from_name(name: &str) -> &str {
    if name.split('-').count() > 2 {
        name.rsplit('-').next().map_or("", str::trim)
    } else {
        ""
    }
}
