//! Reducer for the burger constructor.

use crate::domain::{ConstructorEntry, OrderResponse};
use crate::mvi::{Reducer, RequestEvent};

use super::intent::ConstructorIntent;
use super::state::{ConstructorState, SubmissionStatus};

/// Reducer for constructor state transitions.
///
/// Pure function. Sending the order is done by the caller around the
/// `SubmitOrder` dispatches; the construction is not locked while a
/// submission is in flight.
pub struct ConstructorReducer;

impl Reducer for ConstructorReducer {
    type State = ConstructorState;
    type Intent = ConstructorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConstructorIntent::AddIngredient { entry } => add_ingredient(state, entry),

            ConstructorIntent::RemoveIngredient { placement_id } => {
                let mut state = state;
                if let Some(pos) = state
                    .fillings
                    .iter()
                    .position(|entry| entry.placement_id == placement_id)
                {
                    state.fillings.remove(pos);
                }
                state
            }

            ConstructorIntent::MoveIngredientUp { index } => {
                let mut state = state;
                if index > 0 && index < state.fillings.len() {
                    state.fillings.swap(index, index - 1);
                }
                state
            }

            ConstructorIntent::MoveIngredientDown { index } => {
                let mut state = state;
                if index < state.fillings.len().saturating_sub(1) {
                    state.fillings.swap(index, index + 1);
                }
                state
            }

            ConstructorIntent::SubmitOrder(event) => submit_order(state, event),

            ConstructorIntent::CloseOrderResult => match state.submission_status {
                SubmissionStatus::Succeeded => ConstructorState {
                    submission_status: SubmissionStatus::Idle,
                    last_order_result: None,
                    ..state
                },
                _ => state,
            },

            ConstructorIntent::Reset => ConstructorState::default(),
        }
    }
}

fn add_ingredient(mut state: ConstructorState, entry: ConstructorEntry) -> ConstructorState {
    // Placement ids must stay unique across bun and fillings
    if state.contains_placement(&entry.placement_id) {
        return state;
    }

    if entry.is_bun() {
        state.bun = Some(entry);
    } else {
        state.fillings.push(entry);
    }
    state
}

fn submit_order(state: ConstructorState, event: RequestEvent<OrderResponse>) -> ConstructorState {
    match event {
        RequestEvent::Pending => ConstructorState {
            submission_status: SubmissionStatus::InFlight,
            last_order_result: None,
            last_error: None,
            ..state
        },

        // Construction is consumed by a successful order
        RequestEvent::Fulfilled(response) => ConstructorState {
            bun: None,
            fillings: Vec::new(),
            submission_status: SubmissionStatus::Succeeded,
            last_order_result: Some(response.order),
            last_error: None,
        },

        RequestEvent::Rejected { message } => ConstructorState {
            submission_status: SubmissionStatus::Failed,
            last_order_result: None,
            last_error: Some(message),
            ..state
        },
    }
}
