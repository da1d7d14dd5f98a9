//! Recipe DTOs shared with the page-rendering server.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's recipe schema so the JSON
//! payload embedded in each served page deserializes losslessly and hidden
//! form fields can re-serialize a recipe byte-compatibly for save posts.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    /// Quantity as the server formats it (e.g. `"1"`, `"1/2"`).
    pub amount: String,
    pub unit: String,
    #[serde(default)]
    pub optional: bool,
}

/// One numbered instruction step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    /// 1-based position as assigned by the server.
    pub step: u32,
    pub text: String,
    /// Suggested timer for this step, when the recipe calls for one.
    #[serde(default)]
    pub timer_minutes: Option<u32>,
}

/// Condensed content for the cook-mode screen: short checklist entries and
/// one card text per step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CookModeContent {
    pub ingredients_checklist: Vec<String>,
    pub step_cards: Vec<String>,
}

/// A complete recipe as stored and served by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier (slug string).
    pub id: String,
    pub title: String,
    pub servings: u32,
    pub time_minutes: u32,
    /// Free-form difficulty label (e.g. `"easy"`).
    pub difficulty: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub steps: Vec<RecipeStep>,
    pub substitutions: Vec<String>,
    pub cook_mode: CookModeContent,
}

/// A user note attached to a saved recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeNote {
    pub id: String,
    pub note_text: String,
    /// Server-side creation timestamp, displayed verbatim.
    pub created_at: String,
}
