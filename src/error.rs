use thiserror::Error;

/// Failures surfaced by the bookmark store. Not-found is not an error at
/// this layer; it travels as `Ok(None)` / `Ok(false)`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] libsql::Error),
    #[error("insert did not return a row")]
    MissingRow,
}
