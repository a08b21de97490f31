use std::time::Duration;

use crate::constructor::ConstructorIntent;
use crate::domain::Order;
use crate::mvi::RequestEvent;
use crate::store::Store;

use super::error::OrderError;
use super::gateway::{OrderGateway, OrderRequest};

/// Rejection dispatched when the submission future is dropped mid-request.
pub const CANCELLED_MESSAGE: &str = "Order request cancelled";

/// Submit the current construction through `gateway`.
///
/// Nothing is dispatched when the construction cannot be ordered (no bun,
/// or a submission already in flight). Otherwise `SubmitOrder::Pending` is
/// dispatched before the request and exactly one terminal event after it,
/// also when the returned future is dropped early. A request outliving
/// `timeout` is reported as rejected.
pub async fn submit_order(
    store: &Store,
    gateway: &dyn OrderGateway,
    timeout: Duration,
) -> Result<Order, OrderError> {
    // Check and move to in-flight under one lock
    let request = store.try_dispatch(|state| {
        if state.constructor.is_submitting() {
            return Err(OrderError::AlreadySubmitting);
        }
        let request = OrderRequest::from_construction(&state.constructor)?;
        Ok((
            request,
            ConstructorIntent::SubmitOrder(RequestEvent::Pending).into(),
        ))
    })?;
    let guard = store.cancel_guard(ConstructorIntent::SubmitOrder(RequestEvent::rejected(
        CANCELLED_MESSAGE,
    )));

    tracing::info!(
        gateway = gateway.name(),
        ingredients = request.ingredients.len(),
        "Placing order"
    );

    let outcome = match tokio::time::timeout(timeout, gateway.place_order(&request)).await {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(e)) => Err(OrderError::Gateway(e)),
        Err(_) => Err(OrderError::Timeout { timeout }),
    };
    guard.disarm();

    match outcome {
        Ok(response) => {
            let order = response.order.clone();
            tracing::info!(number = order.number, "Order placed");
            store.dispatch(ConstructorIntent::SubmitOrder(RequestEvent::Fulfilled(
                response,
            )));
            Ok(order)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Order failed");
            store.dispatch(ConstructorIntent::SubmitOrder(RequestEvent::rejected(
                e.to_string(),
            )));
            Err(e)
        }
    }
}
