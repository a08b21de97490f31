use serde::{Deserialize, Serialize};

use crate::domain::Order;
use crate::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedState {
    pub orders: Vec<Order>,
    /// Orders placed all time.
    pub total: u64,
    pub total_today: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl SliceState for FeedState {}

impl FeedState {
    /// Order numbers with the given status, newest first as served.
    pub fn numbers_with_status<'a>(&'a self, status: &'a str) -> impl Iterator<Item = u64> + 'a {
        self.orders
            .iter()
            .filter(move |order| order.status == status)
            .map(|order| order.number)
    }
}
