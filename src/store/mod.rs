//! Root state, the action router and the shared store.
//!
//! Each slice keeps its own reducer and vocabulary; the root reducer only
//! routes. Actions the router does not recognise leave every slice as is.

mod action;
mod root;
mod shared;

pub use action::AppAction;
pub use root::{AppReducer, AppState};
pub use shared::{CancelGuard, Store, JOURNAL_CAPACITY};
