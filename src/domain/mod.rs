//! Data shared between slices and the external collaborators.
//!
//! Field names follow the storefront API on the wire (`_id`, `createdAt`, ...).

mod ingredient;
mod order;
mod user;

pub use ingredient::{ConstructorEntry, Ingredient, IngredientKind, PlacementId};
pub use order::{FeedResponse, Order, OrderResponse};
pub use user::User;
