use thiserror::Error;

/// Errors that can occur while placing or fetching orders.
///
/// Every variant up to and including `TypeCoercion` is caused by the
/// client's payload and maps to HTTP 400; `NotFound` maps to 404 and
/// `Internal` to 500 (see the API layer).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Invalid JSON: {0}")]
    MalformedJson(String),
    #[error("{0}")]
    InvalidShape(String),
    #[error("Missing required customer information")]
    MissingRequiredField,
    #[error("Order must contain at least one item")]
    EmptyItems,
    #[error("{0}")]
    TypeCoercion(String),
    #[error("Order not found")]
    NotFound,
    #[error("Server error: {0}")]
    Internal(String),
}

impl OrderError {
    /// Short label identifying the error kind, exposed in 500 bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::MalformedJson(_) => "MalformedJson",
            OrderError::InvalidShape(_) => "InvalidShape",
            OrderError::MissingRequiredField => "MissingRequiredField",
            OrderError::EmptyItems => "EmptyItems",
            OrderError::TypeCoercion(_) => "TypeCoercion",
            OrderError::NotFound => "NotFound",
            OrderError::Internal(_) => "Internal",
        }
    }
}
