use std::path::PathBuf;

/// Errors returned by [`CollectionStore`](crate::store::CollectionStore) operations
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// No record exists for the requested id
    #[error("post not found")]
    NotFound(u64),

    /// `page` and `limit` must both be at least 1
    #[error("invalid page window: page={page}, limit={limit}")]
    InvalidWindow { page: usize, limit: usize },

    /// Every id up to `u64::MAX` has been handed out
    #[error("no post ids left to assign")]
    IdsExhausted,
}

/// Errors raised while bootstrapping the store from a seed file
///
/// Any of these is fatal: the service must not start with a partially loaded store.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read seed file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed contains post id {0}, leaving no id for new posts")]
    IdsExhausted(u64),
}
