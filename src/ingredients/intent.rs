use std::borrow::Cow;

use crate::domain::Ingredient;
use crate::mvi::{Intent, RequestEvent};

/// Intents for the ingredient catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientsIntent {
    /// Lifecycle of the catalog request.
    Load(RequestEvent<Vec<Ingredient>>),
}

impl Intent for IngredientsIntent {
    fn action_type(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Load(RequestEvent::Pending) => "ingredients/getIngredients/pending",
            Self::Load(RequestEvent::Fulfilled(_)) => "ingredients/getIngredients/fulfilled",
            Self::Load(RequestEvent::Rejected { .. }) => "ingredients/getIngredients/rejected",
        })
    }
}
