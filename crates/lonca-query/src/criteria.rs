use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::facets::DEFAULT_MAX_PRICE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOption {
    /// Every option, in cycle order.
    pub const ALL: [SortOption; 4] = [
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        }
    }

    /// The option a single "tap to cycle" sort control moves to next.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SortOption::PriceAsc => SortOption::PriceDesc,
            SortOption::PriceDesc => SortOption::NameAsc,
            SortOption::NameAsc => SortOption::NameDesc,
            SortOption::NameDesc => SortOption::PriceAsc,
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSortOption(s.to_string()))
    }
}

/// `price-asc → price-desc → name-asc → name-desc → price-asc`.
#[must_use]
pub fn cycle_sort_option(current: SortOption) -> SortOption {
    current.next()
}

/// Inclusive price bounds. `min > max` is valid and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// Lowers `max` to `max_price` when it exceeds it. `min` is untouched.
    pub fn clamp_max(&mut self, max_price: f64) {
        self.max = self.max.min(max_price);
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// User-selected listing criteria, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_query: String,
    pub selected_vendors: Vec<String>,
    pub price_range: PriceRange,
    pub sort_option: SortOption,
}

impl FilterCriteria {
    /// Selects `vendor` if unselected, otherwise deselects it.
    pub fn toggle_vendor(&mut self, vendor: &str) {
        if let Some(pos) = self.selected_vendors.iter().position(|v| v == vendor) {
            self.selected_vendors.remove(pos);
        } else {
            self.selected_vendors.push(vendor.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_follows_fixed_order() {
        assert_eq!(cycle_sort_option(SortOption::PriceAsc), SortOption::PriceDesc);
        assert_eq!(cycle_sort_option(SortOption::PriceDesc), SortOption::NameAsc);
        assert_eq!(cycle_sort_option(SortOption::NameAsc), SortOption::NameDesc);
        assert_eq!(cycle_sort_option(SortOption::NameDesc), SortOption::PriceAsc);
    }

    #[test]
    fn cycle_has_no_fixed_points_and_period_four() {
        for start in SortOption::ALL {
            assert_ne!(cycle_sort_option(start), start);
            let mut current = start;
            for _ in 0..4 {
                current = cycle_sort_option(current);
            }
            assert_eq!(current, start);
        }
    }

    #[test]
    fn cycle_visits_every_state_once() {
        let mut seen = vec![SortOption::PriceAsc];
        let mut current = SortOption::PriceAsc;
        for _ in 0..3 {
            current = current.next();
            assert!(!seen.contains(&current));
            seen.push(current);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn sort_option_parses_and_displays_kebab_case() {
        for option in SortOption::ALL {
            assert_eq!(option.to_string().parse::<SortOption>().unwrap(), option);
        }
        assert_eq!("name-desc".parse::<SortOption>().unwrap(), SortOption::NameDesc);
    }

    #[test]
    fn sort_option_rejects_unknown_name() {
        let err = "price".parse::<SortOption>().unwrap_err();
        assert_eq!(err, QueryError::UnknownSortOption("price".to_string()));
    }

    #[test]
    fn sort_option_serde_uses_kebab_case() {
        let json = serde_json::to_string(&SortOption::PriceDesc).unwrap();
        assert_eq!(json, "\"price-desc\"");
    }

    #[test]
    fn default_criteria_matches_listing_screen_defaults() {
        let criteria = FilterCriteria::default();
        assert!(criteria.search_query.is_empty());
        assert!(criteria.selected_vendors.is_empty());
        assert_eq!(criteria.price_range, PriceRange::new(0.0, 1000.0));
        assert_eq!(criteria.sort_option, SortOption::PriceAsc);
    }

    #[test]
    fn price_range_is_inclusive() {
        let range = PriceRange::new(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.01));
        assert!(!range.contains(9.99));
    }

    #[test]
    fn inverted_price_range_contains_nothing() {
        let range = PriceRange::new(100.0, 0.0);
        assert!(!range.contains(0.0));
        assert!(!range.contains(50.0));
        assert!(!range.contains(100.0));
    }

    #[test]
    fn clamp_max_only_lowers_upper_bound() {
        let mut range = PriceRange::new(5.0, 1000.0);
        range.clamp_max(42.0);
        assert_eq!(range, PriceRange::new(5.0, 42.0));

        range.clamp_max(500.0);
        assert_eq!(range, PriceRange::new(5.0, 42.0));
    }

    #[test]
    fn clamp_max_leaves_min_even_when_it_inverts() {
        let mut range = PriceRange::new(80.0, 1000.0);
        range.clamp_max(42.0);
        assert_eq!(range, PriceRange::new(80.0, 42.0));
    }

    #[test]
    fn toggle_vendor_adds_then_removes() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_vendor("Acme");
        criteria.toggle_vendor("Ajax");
        assert_eq!(criteria.selected_vendors, vec!["Acme", "Ajax"]);
        criteria.toggle_vendor("Acme");
        assert_eq!(criteria.selected_vendors, vec!["Ajax"]);
    }
}
