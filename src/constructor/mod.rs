//! Burger constructor feature module.
//!
//! Owns the burger currently being assembled and the status of the most
//! recent order submission.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Construction (bun + fillings) and submission status
//! - `intent.rs` - Gestures (add, remove, reorder) and order lifecycle events
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ConstructorIntent;
pub use reducer::ConstructorReducer;
pub use state::{ConstructorState, SubmissionStatus};
