//! Base trait for intents (user gestures and request events).

use std::borrow::Cow;

/// Action dispatched to a reducer.
///
/// Intents represent:
/// - User gestures (click-to-add, click-to-remove, reorder)
/// - Request lifecycle events (pending, fulfilled, rejected)
///
/// Every intent has a Redux-style type string such as
/// `constructor/addIngredient` or `user/loginUser/pending`. The store
/// journals it and scenario files use it to name recorded actions.
pub trait Intent: Send + 'static {
    fn action_type(&self) -> Cow<'static, str>;
}
