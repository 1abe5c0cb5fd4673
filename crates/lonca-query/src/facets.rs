use std::collections::BTreeSet;

use lonca_core::Product;

/// Upper price bound used when there are no products to measure.
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

/// Distinct vendor names, sorted ascending in case-sensitive lexical order.
#[must_use]
pub fn compute_vendor_facet(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|product| product.vendor_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Ceiling of the highest price, or [`DEFAULT_MAX_PRICE`] for no products.
#[must_use]
pub fn compute_max_price(products: &[Product]) -> f64 {
    compute_max_price_or(products, DEFAULT_MAX_PRICE)
}

/// Ceiling of the highest price, or `fallback` for no products.
#[must_use]
pub fn compute_max_price_or(products: &[Product], fallback: f64) -> f64 {
    products
        .iter()
        .map(|product| product.price)
        .reduce(f64::max)
        .map_or(fallback, f64::ceil)
}

#[cfg(test)]
mod tests {
    use lonca_core::DescriptionDetails;

    use super::*;

    fn make_product(vendor: &str, price: f64) -> Product {
        Product {
            id: format!("{vendor}-{price}"),
            vendor_name: vendor.to_string(),
            name: "Shirt".to_string(),
            price,
            product_code: String::new(),
            color: String::new(),
            series_name: String::new(),
            series_item_quantity: 0,
            description_details: DescriptionDetails::default(),
            main_image: String::new(),
            images: vec![],
        }
    }

    #[test]
    fn vendor_facet_is_sorted_and_deduplicated() {
        let products = vec![
            make_product("Moda", 1.0),
            make_product("Ajax", 1.0),
            make_product("Moda", 2.0),
        ];
        assert_eq!(compute_vendor_facet(&products), vec!["Ajax", "Moda"]);
    }

    #[test]
    fn vendor_facet_is_case_sensitive() {
        let products = vec![
            make_product("acme", 1.0),
            make_product("Zeta", 1.0),
            make_product("Acme", 1.0),
        ];
        assert_eq!(compute_vendor_facet(&products), vec!["Acme", "Zeta", "acme"]);
    }

    #[test]
    fn vendor_facet_empty_input() {
        assert!(compute_vendor_facet(&[]).is_empty());
    }

    #[test]
    fn max_price_defaults_when_empty() {
        assert!((compute_max_price(&[]) - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn max_price_takes_maximum() {
        let products = vec![make_product("A", 19.99), make_product("B", 42.0)];
        assert!((compute_max_price(&products) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn max_price_rounds_up() {
        let products = vec![make_product("A", 41.2), make_product("B", 3.0)];
        assert!((compute_max_price(&products) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn max_price_uses_custom_fallback_only_when_empty() {
        assert!((compute_max_price_or(&[], 250.0) - 250.0).abs() < f64::EPSILON);
        let products = vec![make_product("A", 10.5)];
        assert!((compute_max_price_or(&products, 250.0) - 11.0).abs() < f64::EPSILON);
    }
}
