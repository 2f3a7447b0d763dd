use thiserror::Error;

use crate::types::AppId;

/// Errors for resolving and decoding box references.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoxRefError {
    /// The app id is not in the foreign app array and is not the calling app.
    #[error("box ref with app id {0} not in foreign apps")]
    InvalidForeignApp(AppId),

    /// A wire tag held a value of the wrong kind.
    #[error("wrong value type for wire tag {0:?}")]
    WireTypeMismatch(&'static str),
}

/// Wrapper result type.
pub type BoxRefResult<T> = Result<T, BoxRefError>;
