//! Reducer trait.

use super::intent::Intent;
use super::state::SliceState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only writer of its slice.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// Must not panic and must not perform side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Like [`Reducer::reduce`], with an absent state meaning the initial value.
    fn reduce_or_default(state: Option<Self::State>, intent: Self::Intent) -> Self::State {
        Self::reduce(state.unwrap_or_default(), intent)
    }
}
