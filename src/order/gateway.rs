use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::constructor::ConstructorState;
use crate::domain::OrderResponse;

use super::error::{GatewayError, OrderError};

/// Body sent to the order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    /// Catalog ids: bun, fillings..., bun.
    pub ingredients: Vec<String>,
}

impl OrderRequest {
    /// Build the request for the current construction.
    pub fn from_construction(state: &ConstructorState) -> Result<Self, OrderError> {
        let ingredients = state.order_ingredient_ids().ok_or(OrderError::MissingBun)?;
        Ok(Self { ingredients })
    }
}

/// External order service.
///
/// Retries and cancellation belong to the implementation; callers only see
/// one outcome per call.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Returns the name of this gateway for logging.
    fn name(&self) -> &str;

    async fn place_order(&self, request: &OrderRequest) -> Result<OrderResponse, GatewayError>;
}

/// Order service answering with a fixed outcome after a fixed delay.
///
/// Used by the CLI and tests in place of the real service.
pub struct CannedOrderGateway {
    outcome: Result<OrderResponse, GatewayError>,
    delay: Duration,
    calls: AtomicUsize,
}

impl CannedOrderGateway {
    /// Gateway that accepts every order with `response`.
    pub fn succeeding(response: OrderResponse) -> Self {
        Self {
            outcome: Ok(response),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Gateway that refuses every order with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(GatewayError::Rejected {
                message: message.into(),
            }),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Gateway that cannot reach the service at all.
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(GatewayError::Unavailable(reason.into())),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Wait this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of orders received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderGateway for CannedOrderGateway {
    fn name(&self) -> &str {
        "canned"
    }

    async fn place_order(&self, request: &OrderRequest) -> Result<OrderResponse, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut response = self.outcome.clone()?;
        // The service echoes the ordered ingredients back
        if response.order.ingredients.is_empty() {
            response.order.ingredients = request.ingredients.clone();
        }
        Ok(response)
    }
}
