//! Client-side query pipeline over a normalized product set: facets,
//! filtering, sorting, and the listing state that ties them together.

pub mod criteria;
pub mod error;
pub mod facets;
pub mod listing;
pub mod pipeline;

pub use criteria::{cycle_sort_option, FilterCriteria, PriceRange, SortOption};
pub use error::QueryError;
pub use facets::{compute_max_price, compute_max_price_or, compute_vendor_facet, DEFAULT_MAX_PRICE};
pub use listing::ListingState;
pub use pipeline::{apply_filters, locale_cmp};
