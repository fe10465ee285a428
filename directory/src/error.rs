//! Error types for directory operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Numeric phone type code outside the known range
    #[error("invalid phone type code: {0} (expected 0..=3)")]
    InvalidPhoneType(i64),

    /// Phone type text that names no known type
    #[error("unknown phone type: {0:?}")]
    UnknownPhoneType(String),

    /// Entry text that could not be split into name and number
    #[error("malformed entry: {0:?} (expected \"name,number[,type]\")")]
    MalformedEntry(String),
}

impl DirectoryError {
    /// Whether the error came from phone type validation
    pub const fn is_phone_type(&self) -> bool {
        matches!(
            self,
            DirectoryError::InvalidPhoneType(_) | DirectoryError::UnknownPhoneType(_)
        )
    }
}
