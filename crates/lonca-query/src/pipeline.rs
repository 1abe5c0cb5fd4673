//! The listing pipeline: text filter, vendor filter, price filter, then a
//! stable sort. Stages always run in that order and never touch the input.

use std::cmp::Ordering;

use feruca::Collator;
use lonca_core::Product;

use crate::criteria::{FilterCriteria, SortOption};

/// Derives the filtered, sorted view of `products` for `criteria`.
#[must_use]
pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let needle = criteria.search_query.to_lowercase();

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|product| needle.is_empty() || matches_text(product, &needle))
        .filter(|product| {
            criteria.selected_vendors.is_empty()
                || criteria.selected_vendors.contains(&product.vendor_name)
        })
        .filter(|product| criteria.price_range.contains(product.price))
        .cloned()
        .collect();

    // `sort_by` is stable; ties keep pipeline order.
    let mut collator = Collator::default();
    filtered.sort_by(|a, b| compare(&mut collator, a, b, criteria.sort_option));

    tracing::debug!(
        input = products.len(),
        output = filtered.len(),
        sort = %criteria.sort_option,
        "applied listing filters"
    );
    filtered
}

/// `needle` must already be lowercased.
fn matches_text(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.vendor_name.to_lowercase().contains(needle)
}

fn compare(collator: &mut Collator, a: &Product, b: &Product, sort: SortOption) -> Ordering {
    match sort {
        SortOption::PriceAsc => a.price.total_cmp(&b.price),
        SortOption::PriceDesc => b.price.total_cmp(&a.price),
        SortOption::NameAsc => collator.collate(a.name.as_str(), b.name.as_str()),
        SortOption::NameDesc => collator.collate(b.name.as_str(), a.name.as_str()),
    }
}

/// Compares two names with the Unicode Collation Algorithm over the CLDR
/// root collation.
///
/// Accented and cedilla letters sort next to their base letter (`"Şal"`
/// between `"Sal"` and `"Tam"`), case is a tertiary difference with
/// lowercase first, and identical strings compare equal.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
