//! Ingredient catalog feature module.
//!
//! Caches the catalog supplied by an external [`CatalogSource`] and tracks
//! the status of the load request.

mod intent;
mod reducer;
mod source;
mod state;

pub use intent::IngredientsIntent;
pub use reducer::IngredientsReducer;
pub use source::{
    load_catalog, CatalogError, CatalogSource, FileCatalog, CATALOG_CANCELLED_MESSAGE,
};
pub use state::IngredientsState;
