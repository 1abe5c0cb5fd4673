pub mod error;
pub mod normalize;
pub mod source;
pub mod store;
pub mod types;
pub mod vendors;

pub use error::CatalogError;
pub use normalize::normalize_record;
pub use source::{CatalogSource, InMemorySource, JsonFileSource};
pub use store::CatalogStore;
pub use types::{RawId, RawRecord};
pub use vendors::{filter_vendor_summaries, summarize_vendors};
