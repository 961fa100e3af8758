//! Contract error types for the catalog service
//!
//! Expected conditions (absence, failed update/delete, bad input) are values,
//! not panics; only genuinely unexpected faults become `Internal`.

use thiserror::Error;

/// Catalog domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Entity absent
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource kind (product, order, profile, user)
        resource: &'static str,
        id: i64,
    },

    /// Bad input (paging bounds, negative price, non-positive quantity)
    #[error("validation error: {message}")]
    Validation { message: String },

    /// A write against an existing row did not take effect
    #[error("{resource} operation failed for id {id}")]
    OperationFailed {
        resource: &'static str,
        id: i64,
    },

    /// Unexpected fault; details stay server-side
    #[error("internal error")]
    Internal,
}
