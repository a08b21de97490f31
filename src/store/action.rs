use std::borrow::Cow;

use crate::constructor::ConstructorIntent;
use crate::feed::FeedIntent;
use crate::ingredients::IngredientsIntent;
use crate::mvi::Intent;
use crate::user::UserIntent;

/// Any action the storefront can dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Constructor(ConstructorIntent),
    Ingredients(IngredientsIntent),
    User(UserIntent),
    Feed(FeedIntent),
    /// Action whose type no slice handles.
    Unknown { action_type: String },
}

impl AppAction {
    pub fn unknown(action_type: impl Into<String>) -> Self {
        Self::Unknown {
            action_type: action_type.into(),
        }
    }
}

impl Intent for AppAction {
    fn action_type(&self) -> Cow<'static, str> {
        match self {
            Self::Constructor(intent) => intent.action_type(),
            Self::Ingredients(intent) => intent.action_type(),
            Self::User(intent) => intent.action_type(),
            Self::Feed(intent) => intent.action_type(),
            Self::Unknown { action_type } => Cow::Owned(action_type.clone()),
        }
    }
}

impl From<ConstructorIntent> for AppAction {
    fn from(intent: ConstructorIntent) -> Self {
        Self::Constructor(intent)
    }
}

impl From<IngredientsIntent> for AppAction {
    fn from(intent: IngredientsIntent) -> Self {
        Self::Ingredients(intent)
    }
}

impl From<UserIntent> for AppAction {
    fn from(intent: UserIntent) -> Self {
        Self::User(intent)
    }
}

impl From<FeedIntent> for AppAction {
    fn from(intent: FeedIntent) -> Self {
        Self::Feed(intent)
    }
}
