use serde::{Deserialize, Serialize};

/// Vendor name used when a raw record carries none.
pub const DEFAULT_VENDOR_NAME: &str = "Unknown Vendor";

/// Product name used when a raw record carries no English name.
pub const DEFAULT_PRODUCT_NAME: &str = "Unnamed Product";

/// A catalog product, normalized from a raw export record with every
/// optional field defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier unwrapped from either a plain string or a `{"$oid": ..}` object.
    pub id: String,
    pub vendor_name: String,
    /// Conventionally `"<family> - <variant> - <color>"`.
    pub name: String,
    pub price: f64,
    /// Dash-delimited code, e.g. `"ABC-001-RED"`. See [`family_key`].
    pub product_code: String,
    /// Trailing segment of `name` when it has more than two segments.
    pub color: String,
    pub series_name: String,
    pub series_item_quantity: u32,
    pub description_details: DescriptionDetails,
    pub main_image: String,
    pub images: Vec<String>,
}

impl Product {
    /// Returns the middle segment of a `"family - variant - color"` name, or
    /// the full name when there is no usable middle segment.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .split('-')
            .nth(1)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(self.name.as_str())
    }

    /// Price of the whole series pack (`price * series_item_quantity`).
    #[must_use]
    pub fn pack_price(&self) -> f64 {
        self.price * f64::from(self.series_item_quantity)
    }

    /// `true` when the product is sold as a multi-item series pack.
    #[must_use]
    pub fn is_pack(&self) -> bool {
        self.series_item_quantity > 1
    }
}

/// Localized descriptive text. Every field defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionDetails {
    pub fabric: String,
    pub model_measurements: String,
    pub product_measurements: String,
    pub sample_size: String,
}

/// One entry of a color switcher: a sibling product in the same code family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    pub name: String,
    pub product_id: String,
    pub main_image: String,
}

impl ProductColor {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.color.clone(),
            product_id: product.id.clone(),
            main_image: product.main_image.clone(),
        }
    }
}

/// Full catalog listing together with its size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

impl ProductListResponse {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let total = products.len();
        Self { products, total }
    }
}

/// Returns the part of a product code before its first dash.
///
/// A code without any dash has an empty family key.
#[must_use]
pub fn family_key(product_code: &str) -> &str {
    product_code
        .split_once('-')
        .map_or("", |(family, _)| family)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(name: &str, price: f64, quantity: u32) -> Product {
        Product {
            id: "65a1".to_string(),
            vendor_name: "Acme".to_string(),
            name: name.to_string(),
            price,
            product_code: "ABC-001-RED".to_string(),
            color: String::new(),
            series_name: String::new(),
            series_item_quantity: quantity,
            description_details: DescriptionDetails::default(),
            main_image: "https://cdn.example.com/a.jpg".to_string(),
            images: vec![],
        }
    }

    #[test]
    fn display_name_uses_middle_segment() {
        let product = make_product("ABC - Linen Shirt - Red", 10.0, 1);
        assert_eq!(product.display_name(), "Linen Shirt");
    }

    #[test]
    fn display_name_falls_back_to_full_name_without_dash() {
        let product = make_product("Linen Shirt", 10.0, 1);
        assert_eq!(product.display_name(), "Linen Shirt");
    }

    #[test]
    fn display_name_falls_back_when_middle_segment_blank() {
        let product = make_product("ABC -  - Red", 10.0, 1);
        assert_eq!(product.display_name(), "ABC -  - Red");
    }

    #[test]
    fn pack_price_multiplies_by_quantity() {
        let product = make_product("Shirt", 12.5, 4);
        assert!((product.pack_price() - 50.0).abs() < f64::EPSILON);
        assert!(product.is_pack());
    }

    #[test]
    fn single_item_is_not_a_pack() {
        assert!(!make_product("Shirt", 12.5, 1).is_pack());
        assert!(!make_product("Shirt", 12.5, 0).is_pack());
    }

    #[test]
    fn family_key_is_segment_before_first_dash() {
        assert_eq!(family_key("ABC-001-RED"), "ABC");
        assert_eq!(family_key("ABC-"), "ABC");
        assert_eq!(family_key("-001"), "");
    }

    #[test]
    fn family_key_empty_without_dash() {
        assert_eq!(family_key("ABC"), "");
        assert_eq!(family_key(""), "");
    }

    #[test]
    fn product_color_projects_color_id_and_image() {
        let mut product = make_product("ABC - Shirt - Red", 10.0, 1);
        product.color = "Red".to_string();
        let color = ProductColor::from_product(&product);
        assert_eq!(color.name, "Red");
        assert_eq!(color.product_id, "65a1");
        assert_eq!(color.main_image, "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn list_response_counts_products() {
        let response = ProductListResponse::new(vec![
            make_product("A", 1.0, 1),
            make_product("B", 2.0, 1),
        ]);
        assert_eq!(response.total, 2);
        assert_eq!(ProductListResponse::default().total, 0);
    }

    #[test]
    fn serde_roundtrip_product() {
        let product = make_product("ABC - Shirt - Red", 19.99, 3);
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, product);
    }
}
