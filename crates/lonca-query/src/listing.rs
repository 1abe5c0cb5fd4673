use lonca_core::Product;

use crate::criteria::{FilterCriteria, PriceRange};
use crate::facets::{compute_max_price_or, compute_vendor_facet, DEFAULT_MAX_PRICE};
use crate::pipeline::apply_filters;

/// State behind a product listing screen: the loaded product set, the
/// caller's criteria, and the facets derived from the products.
#[derive(Debug, Clone)]
pub struct ListingState {
    products: Vec<Product>,
    criteria: FilterCriteria,
    fallback_max_price: f64,
    max_price: f64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::with_fallback_max_price(DEFAULT_MAX_PRICE)
    }
}

impl ListingState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty listing whose max price facet is `fallback_max_price` until a
    /// non-empty product set is loaded.
    #[must_use]
    pub fn with_fallback_max_price(fallback_max_price: f64) -> Self {
        Self {
            products: Vec::new(),
            criteria: FilterCriteria::default(),
            fallback_max_price,
            max_price: fallback_max_price,
        }
    }

    /// Replaces the product set wholesale and recomputes the max price.
    ///
    /// When the new set is non-empty, an upper price bound above the new max
    /// is clamped down to it.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.max_price = compute_max_price_or(&products, self.fallback_max_price);
        if !products.is_empty() {
            self.criteria.price_range.clamp_max(self.max_price);
        }
        tracing::debug!(
            total = products.len(),
            max_price = self.max_price,
            "listing products replaced"
        );
        self.products = products;
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    #[must_use]
    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    #[must_use]
    pub fn vendor_facet(&self) -> Vec<String> {
        compute_vendor_facet(&self.products)
    }

    /// Clears the vendor selection and widens the price range to
    /// `0..=max_price`. Search text and sort order are kept.
    pub fn reset_filters(&mut self) {
        self.criteria.price_range = PriceRange::new(0.0, self.max_price);
        self.criteria.selected_vendors.clear();
        tracing::debug!(max_price = self.max_price, "listing filters reset");
    }

    /// Advances the sort control one step.
    pub fn cycle_sort(&mut self) {
        self.criteria.sort_option = self.criteria.sort_option.next();
    }

    /// The filtered, sorted products for the current criteria.
    #[must_use]
    pub fn view(&self) -> Vec<Product> {
        apply_filters(&self.products, &self.criteria)
    }
}
