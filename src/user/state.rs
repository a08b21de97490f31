use serde::{Deserialize, Serialize};

use crate::domain::{Order, User};
use crate::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserState {
    /// A session check or sign-in is underway.
    pub is_auth_checked: bool,
    pub is_authenticated: bool,
    /// A login or profile fetch is outstanding.
    pub login_user_request: bool,
    /// Any other user request is outstanding.
    pub request: bool,
    pub error: Option<String>,
    pub user_data: Option<User>,
    /// Profile echoed by the last register or update.
    pub response: Option<User>,
    pub user_orders: Vec<Order>,
}

impl SliceState for UserState {}
