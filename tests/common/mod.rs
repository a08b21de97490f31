//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;

use stellar_burger::constructor::{ConstructorIntent, ConstructorReducer, ConstructorState};
use stellar_burger::domain::{ConstructorEntry, Ingredient, OrderResponse, PlacementId, User};
use stellar_burger::mvi::Reducer;
use tempfile::TempDir;

pub const CRATER_BUN: &str = "643d69a5c3f7b9001cfa093c";
pub const FLUOR_BUN: &str = "643d69a5c3f7b9001cfa093d";
pub const SPICY_SAUCE: &str = "643d69a5c3f7b9001cfa0942";
pub const SPACE_SAUCE: &str = "643d69a5c3f7b9001cfa0943";
pub const MINERAL_RINGS: &str = "643d69a5c3f7b9001cfa0946";
pub const SALAD: &str = "643d69a5c3f7b9001cfa0949";
pub const CHEESE: &str = "643d69a5c3f7b9001cfa094a";

const INGREDIENTS_JSON: &str = include_str!("../fixtures/ingredients.json");
const ORDER_RESPONSE_JSON: &str = include_str!("../fixtures/order_response.json");
const USER_JSON: &str = include_str!("../fixtures/user.json");

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The fixture catalog, in catalog order.
pub fn catalog() -> Vec<Ingredient> {
    let body: serde_json::Value =
        serde_json::from_str(INGREDIENTS_JSON).expect("fixture catalog is valid JSON");
    serde_json::from_value(body["data"].clone()).expect("fixture catalog has ingredients")
}

/// A fixture ingredient by catalog id.
pub fn ingredient(catalog_id: &str) -> Ingredient {
    catalog()
        .into_iter()
        .find(|i| i.id == catalog_id)
        .unwrap_or_else(|| panic!("no fixture ingredient {catalog_id}"))
}

/// A fixture ingredient placed under a known placement id.
pub fn entry(catalog_id: &str, placement: &str) -> ConstructorEntry {
    ConstructorEntry::new(ingredient(catalog_id), PlacementId::from(placement))
}

pub fn add_intent(catalog_id: &str, placement: &str) -> ConstructorIntent {
    ConstructorIntent::AddIngredient {
        entry: entry(catalog_id, placement),
    }
}

/// Fold intents over the initial constructor state.
pub fn reduce_all(intents: impl IntoIterator<Item = ConstructorIntent>) -> ConstructorState {
    intents
        .into_iter()
        .fold(ConstructorState::default(), ConstructorReducer::reduce)
}

/// Order service answer with order number 38483.
pub fn order_response() -> OrderResponse {
    serde_json::from_str(ORDER_RESPONSE_JSON).expect("fixture order response is valid")
}

pub fn fixture_user() -> User {
    let body: serde_json::Value = serde_json::from_str(USER_JSON).expect("fixture user is valid JSON");
    serde_json::from_value(body["user"].clone()).expect("fixture user has a profile")
}

/// Placement ids of the fillings, in order.
pub fn filling_ids(state: &ConstructorState) -> Vec<String> {
    state
        .fillings
        .iter()
        .map(|e| e.placement_id.as_str().to_string())
        .collect()
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
