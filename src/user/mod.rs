//! User session feature module.
//!
//! Tracks authentication flags, the signed-in profile and the user's own
//! order history. Token storage and refresh live outside this crate.

mod intent;
mod reducer;
mod state;

pub use intent::UserIntent;
pub use reducer::UserReducer;
pub use state::UserState;
