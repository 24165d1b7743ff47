//! Domain error model.

use thiserror::Error;

use crate::id::OrderId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the operation that produced it was rejected
/// and left the order store untouched. "Nothing matched" outcomes (an empty
/// filter result, no order to assign) are not errors and never use this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation (blank id/name, item count below one,
    /// negative distance, unparseable number).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An order with this id is already in the store.
    #[error("order id already exists: {0}")]
    DuplicateId(OrderId),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_id(id: OrderId) -> Self {
        Self::DuplicateId(id)
    }

    /// Human-readable reason without the error-kind prefix, for display.
    pub fn reason(&self) -> String {
        match self {
            DomainError::Validation(msg) => msg.clone(),
            DomainError::DuplicateId(_) => "Order ID already exists".to_string(),
        }
    }
}
