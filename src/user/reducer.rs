use crate::mvi::{Reducer, RequestEvent};

use super::intent::UserIntent;
use super::state::UserState;

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Intent = UserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UserIntent::GetUser(event) => match event {
                RequestEvent::Pending => UserState {
                    is_authenticated: true,
                    is_auth_checked: true,
                    login_user_request: true,
                    ..state
                },
                RequestEvent::Fulfilled(user) => UserState {
                    is_authenticated: true,
                    is_auth_checked: false,
                    login_user_request: false,
                    user_data: Some(user),
                    ..state
                },
                RequestEvent::Rejected { .. } => UserState {
                    is_authenticated: false,
                    is_auth_checked: false,
                    login_user_request: false,
                    ..state
                },
            },

            UserIntent::GetOrdersAll(event) => match event {
                RequestEvent::Pending => UserState {
                    request: true,
                    error: None,
                    ..state
                },
                RequestEvent::Fulfilled(orders) => UserState {
                    request: false,
                    error: None,
                    user_orders: orders,
                    ..state
                },
                RequestEvent::Rejected { message } => UserState {
                    request: false,
                    error: Some(message),
                    ..state
                },
            },

            UserIntent::Register(event) => match event {
                RequestEvent::Pending => UserState {
                    request: true,
                    error: None,
                    is_auth_checked: true,
                    is_authenticated: false,
                    ..state
                },
                RequestEvent::Fulfilled(user) => UserState {
                    request: false,
                    error: None,
                    response: Some(user.clone()),
                    user_data: Some(user),
                    is_auth_checked: false,
                    is_authenticated: true,
                    ..state
                },
                RequestEvent::Rejected { message } => UserState {
                    request: false,
                    error: Some(message),
                    is_auth_checked: false,
                    ..state
                },
            },

            UserIntent::Login(event) => match event {
                RequestEvent::Pending => UserState {
                    login_user_request: true,
                    is_auth_checked: true,
                    is_authenticated: false,
                    error: None,
                    ..state
                },
                RequestEvent::Fulfilled(user) => UserState {
                    login_user_request: false,
                    is_auth_checked: false,
                    is_authenticated: true,
                    error: None,
                    user_data: Some(user),
                    ..state
                },
                RequestEvent::Rejected { message } => UserState {
                    login_user_request: false,
                    is_auth_checked: false,
                    is_authenticated: false,
                    error: Some(message),
                    ..state
                },
            },

            UserIntent::Update(event) => match event {
                RequestEvent::Pending => UserState {
                    request: true,
                    error: None,
                    ..state
                },
                RequestEvent::Fulfilled(user) => UserState {
                    request: false,
                    error: None,
                    response: Some(user.clone()),
                    user_data: Some(user),
                    ..state
                },
                RequestEvent::Rejected { message } => UserState {
                    request: false,
                    error: Some(message),
                    ..state
                },
            },

            // Session stays authenticated until the server confirms the logout
            UserIntent::Logout(event) => match event {
                RequestEvent::Pending => UserState {
                    request: true,
                    is_auth_checked: true,
                    is_authenticated: true,
                    error: None,
                    ..state
                },
                RequestEvent::Fulfilled(()) => UserState {
                    request: false,
                    is_auth_checked: false,
                    is_authenticated: false,
                    error: None,
                    user_data: None,
                    ..state
                },
                RequestEvent::Rejected { message } => UserState {
                    request: false,
                    is_auth_checked: false,
                    is_authenticated: true,
                    error: Some(message),
                    ..state
                },
            },

            UserIntent::ResetError => UserState { error: None, ..state },
        }
    }
}
