use std::borrow::Cow;

use crate::domain::{Order, User};
use crate::mvi::{Intent, RequestEvent};

/// Intents for the user session.
#[derive(Debug, Clone, PartialEq)]
pub enum UserIntent {
    /// Fetch the profile with the stored access token.
    GetUser(RequestEvent<User>),
    /// Fetch the user's order history.
    GetOrdersAll(RequestEvent<Vec<Order>>),
    Register(RequestEvent<User>),
    Login(RequestEvent<User>),
    /// Profile edit.
    Update(RequestEvent<User>),
    Logout(RequestEvent<()>),
    /// User dismissed the error banner.
    ResetError,
}

impl Intent for UserIntent {
    fn action_type(&self) -> Cow<'static, str> {
        let (family, event) = match self {
            Self::GetUser(e) => ("getUser", e.stage()),
            Self::GetOrdersAll(e) => ("getOrdersAll", e.stage()),
            Self::Register(e) => ("registerUser", e.stage()),
            Self::Login(e) => ("loginUser", e.stage()),
            Self::Update(e) => ("updateUser", e.stage()),
            Self::Logout(e) => ("logoutUser", e.stage()),
            Self::ResetError => return Cow::Borrowed("user/resetError"),
        };
        Cow::Owned(format!("user/{family}/{event}"))
    }
}
