use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown sort option \"{0}\"; expected price-asc, price-desc, name-asc, or name-desc")]
    UnknownSortOption(String),
}
