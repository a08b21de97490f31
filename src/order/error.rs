use std::time::Duration;

use thiserror::Error;

/// Failure reported by an order service.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Service answered and refused the order.
    #[error("{message}")]
    Rejected { message: String },

    /// Service could not be reached.
    #[error("Order service unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while submitting an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A burger cannot be ordered without a bun.
    #[error("Cannot place an order without a bun")]
    MissingBun,

    /// A submission is already outstanding.
    #[error("An order is already being placed")]
    AlreadySubmitting,

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Order request timed out after {}ms", .timeout.as_millis())]
    Timeout { timeout: Duration },
}
