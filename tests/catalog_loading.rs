mod common;

use std::time::Duration;

use async_trait::async_trait;
use common::*;
use stellar_burger::domain::{Ingredient, IngredientKind};
use stellar_burger::ingredients::{
    load_catalog, CatalogError, CatalogSource, FileCatalog, CATALOG_CANCELLED_MESSAGE,
};
use stellar_burger::store::Store;

/// Source answering like an endpoint that reported `success: false`.
struct DownSource;

#[async_trait]
impl CatalogSource for DownSource {
    fn name(&self) -> &str {
        "down"
    }

    async fn fetch(&self) -> Result<Vec<Ingredient>, CatalogError> {
        Err(CatalogError::Unsuccessful)
    }
}

/// Source that takes a long time to answer.
struct SlowSource;

#[async_trait]
impl CatalogSource for SlowSource {
    fn name(&self) -> &str {
        "slow"
    }

    async fn fetch(&self) -> Result<Vec<Ingredient>, CatalogError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(catalog())
    }
}

#[tokio::test(start_paused = true)]
async fn dropped_load_clears_loading_flag() {
    let store = Store::new();
    let outer = tokio::time::timeout(Duration::from_secs(1), load_catalog(&store, &SlowSource)).await;
    assert!(outer.is_err());

    let ingredients = store.select(|s| s.ingredients.clone());
    assert!(!ingredients.loading);
    assert_eq!(ingredients.error.as_deref(), Some(CATALOG_CANCELLED_MESSAGE));
    assert_eq!(
        store.journal(),
        vec![
            "ingredients/getIngredients/pending",
            "ingredients/getIngredients/rejected"
        ]
    );
}

#[tokio::test]
async fn fixture_catalog_loads_into_store() {
    let store = Store::new();
    let count = load_catalog(&store, &FileCatalog::new(fixture_path("ingredients.json")))
        .await
        .unwrap();
    assert_eq!(count, 7);

    let ingredients = store.select(|s| s.ingredients.clone());
    assert!(!ingredients.loading);
    assert!(ingredients.error.is_none());
    assert_eq!(ingredients.ingredients, catalog());
    assert_eq!(ingredients.of_kind(IngredientKind::Sauce).count(), 2);
    assert_eq!(ingredients.of_kind(IngredientKind::Main).count(), 3);
    assert_eq!(
        store.journal(),
        vec![
            "ingredients/getIngredients/pending",
            "ingredients/getIngredients/fulfilled"
        ]
    );
}

#[tokio::test]
async fn missing_file_is_rejected() {
    let store = Store::new();
    let source = FileCatalog::new(fixture_path("missing.json"));
    let err = load_catalog(&store, &source).await.unwrap_err();
    assert!(matches!(err, CatalogError::ReadError { .. }));

    let ingredients = store.select(|s| s.ingredients.clone());
    assert!(!ingredients.loading);
    assert!(ingredients.ingredients.is_empty());
    assert!(ingredients
        .error
        .as_deref()
        .is_some_and(|e| e.contains("missing.json")));
}

#[tokio::test]
async fn failed_reload_keeps_previous_catalog() {
    let store = Store::new();
    load_catalog(&store, &FileCatalog::new(fixture_path("ingredients.json")))
        .await
        .unwrap();

    let err = load_catalog(&store, &DownSource).await.unwrap_err();
    assert!(matches!(err, CatalogError::Unsuccessful));

    let ingredients = store.select(|s| s.ingredients.clone());
    assert_eq!(ingredients.ingredients.len(), 7);
    assert_eq!(
        ingredients.error.as_deref(),
        Some("Catalog request was not successful")
    );
}

#[tokio::test]
async fn null_data_loads_as_empty_catalog() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("ingredients.json");
    std::fs::write(&path, r#"{"success": true, "data": null}"#).unwrap();

    let store = Store::new();
    let count = load_catalog(&store, &FileCatalog::new(path)).await.unwrap();
    assert_eq!(count, 0);
    assert!(store.select(|s| s.ingredients.error.is_none()));
}
