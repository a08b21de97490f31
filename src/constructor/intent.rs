//! Intents for the burger constructor.

use std::borrow::Cow;

use crate::domain::{ConstructorEntry, Ingredient, OrderResponse, PlacementId};
use crate::mvi::{Intent, RequestEvent};

/// Intents that can be dispatched to the constructor reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructorIntent {
    /// Place an ingredient. Buns replace the current bun, everything else
    /// is appended to the fillings.
    AddIngredient { entry: ConstructorEntry },

    /// Remove the filling with this placement id. The bun is never removed.
    RemoveIngredient { placement_id: PlacementId },

    /// Swap the filling at `index` with its predecessor.
    MoveIngredientUp { index: usize },

    /// Swap the filling at `index` with its successor.
    MoveIngredientDown { index: usize },

    /// Lifecycle of the order submission request.
    SubmitOrder(RequestEvent<OrderResponse>),

    /// User dismissed the order confirmation.
    CloseOrderResult,

    /// Back to the initial value.
    Reset,
}

impl ConstructorIntent {
    /// Add intent with a freshly generated placement id.
    pub fn add(ingredient: Ingredient) -> Self {
        Self::AddIngredient {
            entry: ConstructorEntry::place(ingredient),
        }
    }

    pub fn remove(placement_id: impl Into<PlacementId>) -> Self {
        Self::RemoveIngredient {
            placement_id: placement_id.into(),
        }
    }
}

impl Intent for ConstructorIntent {
    fn action_type(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::AddIngredient { .. } => "constructor/addIngredient",
            Self::RemoveIngredient { .. } => "constructor/removeIngredient",
            Self::MoveIngredientUp { .. } => "constructor/moveIngredientUp",
            Self::MoveIngredientDown { .. } => "constructor/moveIngredientDown",
            Self::SubmitOrder(RequestEvent::Pending) => "order/orderBurger/pending",
            Self::SubmitOrder(RequestEvent::Fulfilled(_)) => "order/orderBurger/fulfilled",
            Self::SubmitOrder(RequestEvent::Rejected { .. }) => "order/orderBurger/rejected",
            Self::CloseOrderResult => "constructor/closeOrderModal",
            Self::Reset => "constructor/reset",
        })
    }
}
