//! Domain Errors

/// Common result type for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// Cart-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// Update or removal addressed a row that does not exist
    #[error("no cart line at index {index} (cart has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },
}
