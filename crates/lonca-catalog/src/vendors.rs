//! Vendor directory aggregation over normalized products.

use std::collections::HashMap;

use lonca_core::{vendor_slug, Product, VendorSummary};

/// Groups products by vendor name, one [`VendorSummary`] per distinct vendor
/// in first-seen order. The first product seen supplies the logo.
#[must_use]
pub fn summarize_vendors(products: &[Product]) -> Vec<VendorSummary> {
    let mut summaries: Vec<VendorSummary> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for product in products {
        if let Some(&idx) = index_by_name.get(product.vendor_name.as_str()) {
            summaries[idx].product_count += 1;
        } else {
            index_by_name.insert(&product.vendor_name, summaries.len());
            summaries.push(VendorSummary {
                id: vendor_slug(&product.vendor_name),
                name: product.vendor_name.clone(),
                logo: product.main_image.clone(),
                product_count: 1,
            });
        }
    }

    summaries
}

/// Keeps summaries whose name contains `query`, case-insensitively. An empty
/// query keeps everything.
#[must_use]
pub fn filter_vendor_summaries(summaries: &[VendorSummary], query: &str) -> Vec<VendorSummary> {
    let needle = query.to_lowercase();
    summaries
        .iter()
        .filter(|summary| summary.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
