use thiserror::Error;

/// Errors that abort loading a temperature CSV.
///
/// Row-level problems (bad dates, non-numeric temperatures) are not errors;
/// they are counted in [`crate::loader::LoadStats`] and the row is dropped.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read temperature CSV")]
    Csv(#[from] csv::Error),

    #[error("required column '{0}' is missing from the CSV header")]
    MissingColumn(&'static str),

    #[error("no valid rows in temperature CSV ({rejected} of {read} rows rejected)")]
    NoValidRows { read: usize, rejected: usize },

    #[error("failed to fetch '{url}': {reason}")]
    Fetch { url: String, reason: String },
}
