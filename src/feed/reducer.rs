use crate::mvi::{Reducer, RequestEvent};

use super::intent::FeedIntent;
use super::state::FeedState;

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::Load(RequestEvent::Pending) => FeedState {
                loading: true,
                error: None,
                ..state
            },
            FeedIntent::Load(RequestEvent::Fulfilled(feed)) => FeedState {
                orders: feed.orders,
                total: feed.total,
                total_today: feed.total_today,
                loading: false,
                error: None,
            },
            FeedIntent::Load(RequestEvent::Rejected { message }) => FeedState {
                loading: false,
                error: Some(message),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeedResponse, Order};

    fn order(number: u64, status: &str) -> Order {
        Order {
            id: format!("order-{number}"),
            status: status.to_string(),
            name: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            number,
            ingredients: Vec::new(),
        }
    }

    #[test]
    fn fulfilled_replaces_orders_and_totals() {
        let state = FeedReducer::reduce(FeedState::default(), FeedIntent::Load(RequestEvent::Pending));
        assert!(state.loading);

        let state = FeedReducer::reduce(
            state,
            FeedIntent::Load(RequestEvent::Fulfilled(FeedResponse {
                orders: vec![order(2, "done"), order(1, "pending")],
                total: 100,
                total_today: 5,
            })),
        );
        assert!(!state.loading);
        assert_eq!(state.total, 100);
        assert_eq!(state.total_today, 5);
        assert_eq!(state.numbers_with_status("done").collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn rejected_keeps_previous_orders() {
        let loaded = FeedState {
            orders: vec![order(1, "done")],
            total: 1,
            total_today: 1,
            loading: false,
            error: None,
        };
        let state = FeedReducer::reduce(
            loaded.clone(),
            FeedIntent::Load(RequestEvent::rejected("offline")),
        );
        assert_eq!(state.orders, loaded.orders);
        assert_eq!(state.error.as_deref(), Some("offline"));
    }
}
