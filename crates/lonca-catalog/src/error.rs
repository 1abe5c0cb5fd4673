use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog data in {context}: {source}")]
    Malformed {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
