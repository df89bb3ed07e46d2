use crate::store::StoreError;

/// Failure taxonomy shared by every core operation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field is missing, blank after trimming, or out of bounds.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// The persistence layer failed; the message is passed through as-is.
    #[error(transparent)]
    Store(#[from] StoreError),
}
