use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a catalog ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Bun,
    Sauce,
    Main,
}

impl IngredientKind {
    pub fn is_bun(self) -> bool {
        matches!(self, Self::Bun)
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bun => "bun",
            Self::Sauce => "sauce",
            Self::Main => "main",
        };
        f.write_str(name)
    }
}

/// Immutable catalog record supplied by the ingredient catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Catalog identifier, shared by every placement of this ingredient.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IngredientKind,
    #[serde(default)]
    pub proteins: u32,
    #[serde(default)]
    pub fat: u32,
    #[serde(default)]
    pub carbohydrates: u32,
    #[serde(default)]
    pub calories: u32,
    pub price: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_mobile: String,
    #[serde(default)]
    pub image_large: String,
}

impl Ingredient {
    pub fn is_bun(&self) -> bool {
        self.kind.is_bun()
    }
}

/// Identifies one occurrence of an ingredient inside the construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementId(String);

impl PlacementId {
    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlacementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlacementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ingredient placed into the construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorEntry {
    #[serde(rename = "id")]
    pub placement_id: PlacementId,
    #[serde(flatten)]
    pub ingredient: Ingredient,
}

impl ConstructorEntry {
    pub fn new(ingredient: Ingredient, placement_id: PlacementId) -> Self {
        Self {
            placement_id,
            ingredient,
        }
    }

    /// Places `ingredient` under a freshly generated placement id.
    pub fn place(ingredient: Ingredient) -> Self {
        Self::new(ingredient, PlacementId::generate())
    }

    pub fn catalog_id(&self) -> &str {
        &self.ingredient.id
    }

    pub fn is_bun(&self) -> bool {
        self.ingredient.is_bun()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUN_JSON: &str = r#"{
        "_id": "643d69a5c3f7b9001cfa093c",
        "name": "Краторная булка N-200i",
        "type": "bun",
        "proteins": 80,
        "fat": 24,
        "carbohydrates": 53,
        "calories": 420,
        "price": 1255,
        "image": "https://code.s3.yandex.net/react/code/bun-02.png",
        "image_mobile": "https://code.s3.yandex.net/react/code/bun-02-mobile.png",
        "image_large": "https://code.s3.yandex.net/react/code/bun-02-large.png",
        "__v": 0
    }"#;

    #[test]
    fn ingredient_parses_wire_names() {
        let bun: Ingredient = serde_json::from_str(BUN_JSON).unwrap();
        assert_eq!(bun.id, "643d69a5c3f7b9001cfa093c");
        assert_eq!(bun.kind, IngredientKind::Bun);
        assert_eq!(bun.price, 1255);
        assert!(bun.is_bun());
    }

    #[test]
    fn entry_flattens_ingredient_next_to_placement_id() {
        let bun: Ingredient = serde_json::from_str(BUN_JSON).unwrap();
        let entry = ConstructorEntry::new(bun, PlacementId::from("bun-1"));
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], "bun-1");
        assert_eq!(value["_id"], "643d69a5c3f7b9001cfa093c");
        assert_eq!(value["type"], "bun");
    }

    #[test]
    fn generated_placement_ids_differ() {
        assert_ne!(PlacementId::generate(), PlacementId::generate());
    }
}
