//! Read-only catalog store over an injected [`CatalogSource`].
//!
//! Every public query absorbs source failures: the failure is logged and
//! the query answers with its empty value (`None`, `[]`, or a zero-total
//! listing). [`CatalogStore::try_load_catalog`] is the one entry point that
//! surfaces the typed error.

use lonca_core::{vendor_slug, Product, ProductColor, ProductListResponse, VendorSummary};

use crate::error::CatalogError;
use crate::normalize::normalize_record;
use crate::source::CatalogSource;
use crate::types::RawRecord;
use crate::vendors::summarize_vendors;

pub struct CatalogStore<S> {
    source: S,
}

impl<S: CatalogSource> CatalogStore<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads and normalizes the full catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the source cannot supply its records.
    pub fn try_load_catalog(&self) -> Result<ProductListResponse, CatalogError> {
        let products: Vec<Product> = self.source.records()?.iter().map(normalize_record).collect();
        tracing::debug!(total = products.len(), "catalog loaded");
        Ok(ProductListResponse::new(products))
    }

    /// Loads and normalizes the full catalog, answering with an empty listing
    /// when the source is unreadable.
    pub fn load_catalog(&self) -> ProductListResponse {
        self.try_load_catalog().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load catalog; serving empty listing");
            ProductListResponse::default()
        })
    }

    /// Finds the product whose unwrapped identifier equals `id`.
    pub fn get_product_by_id(&self, id: &str) -> Option<Product> {
        self.with_records("get_product_by_id", |records| {
            records
                .iter()
                .find(|record| record.id.as_str() == id)
                .map(normalize_record)
        })
    }

    /// Lists every product in the code family of `product_code`, projected
    /// for a color switcher.
    ///
    /// The family key is the part of `product_code` before its first dash;
    /// products match when their own code starts with that key.
    pub fn get_product_colors(&self, product_code: &str) -> Vec<ProductColor> {
        if product_code.is_empty() {
            return Vec::new();
        }
        let family = lonca_core::family_key(product_code);
        self.with_records("get_product_colors", |records| {
            records
                .iter()
                .map(normalize_record)
                .filter(|product| product.product_code.starts_with(family))
                .map(|product| ProductColor::from_product(&product))
                .collect()
        })
    }

    /// Lists products whose code equals `product_code` exactly, leaving out
    /// the product with id `exclude_id`.
    pub fn get_related_products(&self, product_code: &str, exclude_id: &str) -> Vec<Product> {
        self.with_records("get_related_products", |records| {
            records
                .iter()
                .filter(|record| {
                    record.product_code() == product_code && record.id.as_str() != exclude_id
                })
                .map(normalize_record)
                .collect()
        })
    }

    /// Aggregates one [`VendorSummary`] per distinct vendor, in first-seen order.
    pub fn vendor_summaries(&self) -> Vec<VendorSummary> {
        summarize_vendors(&self.load_catalog().products)
    }

    /// Lists the products of the vendor whose slug is `slug`.
    pub fn products_by_vendor(&self, slug: &str) -> Vec<Product> {
        self.load_catalog()
            .products
            .into_iter()
            .filter(|product| vendor_slug(&product.vendor_name) == slug)
            .collect()
    }

    fn with_records<T, F>(&self, operation: &str, query: F) -> T
    where
        T: Default,
        F: FnOnce(Vec<RawRecord>) -> T,
    {
        match self.source.records() {
            Ok(records) => query(records),
            Err(e) => {
                tracing::warn!(operation, error = %e, "catalog source unavailable");
                T::default()
            }
        }
    }
}
