use serde::{Deserialize, Serialize};

use crate::constructor::{ConstructorReducer, ConstructorState};
use crate::feed::{FeedReducer, FeedState};
use crate::ingredients::{IngredientsReducer, IngredientsState};
use crate::mvi::{Reducer, SliceState};
use crate::user::{UserReducer, UserState};

use super::action::AppAction;

/// All slices of the storefront state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub constructor: ConstructorState,
    pub ingredients: IngredientsState,
    pub user: UserState,
    pub feed: FeedState,
}

impl SliceState for AppState {}

/// Routes each action to the slice that owns its vocabulary.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppAction::Constructor(intent) => AppState {
                constructor: ConstructorReducer::reduce(state.constructor, intent),
                ..state
            },
            AppAction::Ingredients(intent) => AppState {
                ingredients: IngredientsReducer::reduce(state.ingredients, intent),
                ..state
            },
            AppAction::User(intent) => AppState {
                user: UserReducer::reduce(state.user, intent),
                ..state
            },
            AppAction::Feed(intent) => AppState {
                feed: FeedReducer::reduce(state.feed, intent),
                ..state
            },
            AppAction::Unknown { .. } => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructor::ConstructorIntent;
    use crate::mvi::RequestEvent;
    use crate::user::UserIntent;

    #[test]
    fn absent_state_with_unknown_action_is_initial() {
        let state = AppReducer::reduce_or_default(None, AppAction::unknown("UNKNOWN_ACTION_TYPE"));
        assert_eq!(state, AppState::default());
        assert!(state.constructor.bun.is_none());
        assert!(state.constructor.fillings.is_empty());
        assert!(state.ingredients.ingredients.is_empty());
        assert!(state.user.user_data.is_none());
    }

    #[test]
    fn constructor_action_leaves_other_slices() {
        let state = AppState::default();
        let state = AppReducer::reduce(
            state,
            AppAction::User(UserIntent::Logout(RequestEvent::Pending)),
        );
        let user_before = state.user.clone();
        let state = AppReducer::reduce(
            state,
            AppAction::Constructor(ConstructorIntent::SubmitOrder(RequestEvent::Pending)),
        );
        assert_eq!(state.user, user_before);
        assert_eq!(state.feed, FeedState::default());
    }
}
