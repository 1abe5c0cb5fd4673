use serde::{Deserialize, Serialize};

/// Per-vendor aggregate shown on the vendor directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorSummary {
    /// URL-safe slug, see [`vendor_slug`].
    pub id: String,
    pub name: String,
    /// Main image of the first product seen for this vendor.
    pub logo: String,
    pub product_count: usize,
}

/// Generate a URL-safe slug from a vendor name: lowercase, with every run of
/// whitespace replaced by a single `-`.
#[must_use]
pub fn vendor_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple_name() {
        assert_eq!(vendor_slug("Moda Istanbul"), "moda-istanbul");
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(vendor_slug("Moda \t  Istanbul"), "moda-istanbul");
    }

    #[test]
    fn slug_keeps_punctuation_and_non_ascii() {
        assert_eq!(vendor_slug("Şık Butik's"), "şık-butik's");
    }

    #[test]
    fn slug_keeps_leading_and_trailing_whitespace_as_dash() {
        assert_eq!(vendor_slug(" Acme "), "-acme-");
    }
}
