use serde::{Deserialize, Serialize};

use crate::domain::{Ingredient, IngredientKind};
use crate::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IngredientsState {
    pub ingredients: Vec<Ingredient>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SliceState for IngredientsState {}

impl IngredientsState {
    /// Looks up a catalog record by its catalog id.
    pub fn find(&self, catalog_id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == catalog_id)
    }

    /// Catalog records of one category, in catalog order.
    pub fn of_kind(&self, kind: IngredientKind) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(move |i| i.kind == kind)
    }
}
