use crate::mvi::{Reducer, RequestEvent};

use super::intent::IngredientsIntent;
use super::state::IngredientsState;

pub struct IngredientsReducer;

impl Reducer for IngredientsReducer {
    type State = IngredientsState;
    type Intent = IngredientsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            IngredientsIntent::Load(RequestEvent::Pending) => IngredientsState {
                loading: true,
                error: None,
                ..state
            },
            IngredientsIntent::Load(RequestEvent::Fulfilled(ingredients)) => IngredientsState {
                ingredients,
                loading: false,
                error: None,
            },
            // Keep whatever was loaded before
            IngredientsIntent::Load(RequestEvent::Rejected { message }) => IngredientsState {
                loading: false,
                error: Some(message),
                ..state
            },
        }
    }
}
