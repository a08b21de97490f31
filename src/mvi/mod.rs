//! Model-View-Intent (MVI) primitives shared by every state slice.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain value describing one slice of the storefront
//! - **Intent**: user gesture or request lifecycle event
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Async requests never run inside a reducer. They are surfaced as
//! [`RequestEvent`] values dispatched by the caller around the request.

mod intent;
mod reducer;
mod request;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use request::RequestEvent;
pub use state::SliceState;
