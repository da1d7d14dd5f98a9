//! Browser localStorage helpers for cook-mode progress.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is synchronous, best-effort, and origin-local: writes ignore
//! quota or disabled-storage failures, and non-browser builds no-op so
//! native tests and server rendering stay deterministic. Keys are scoped
//! per recipe, so concurrently open recipes never contend.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::config::RecipeId;

/// Namespace prefix shared by all cook-mode storage keys.
pub const STORAGE_NAMESPACE: &str = "cook";

/// Storage key holding the current step index as a decimal string.
pub fn step_key(recipe_id: &RecipeId) -> String {
    format!("{STORAGE_NAMESPACE}:{}:step", recipe_id.as_str())
}

/// Storage key holding the checked-ingredient JSON array.
pub fn ingredients_key(recipe_id: &RecipeId) -> String {
    format!("{STORAGE_NAMESPACE}:{}:ingredients", recipe_id.as_str())
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the raw persisted step value, if any.
pub fn load_step(recipe_id: &RecipeId) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        storage()?.get_item(&step_key(recipe_id)).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = recipe_id;
        None
    }
}

/// Persist the current step index.
pub fn save_step(recipe_id: &RecipeId, index: usize) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(&step_key(recipe_id), &index.to_string());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (recipe_id, index);
    }
}

/// Read the raw persisted ingredient payload, if any.
pub fn load_ingredients(recipe_id: &RecipeId) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        storage()?.get_item(&ingredients_key(recipe_id)).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = recipe_id;
        None
    }
}

/// Overwrite the persisted ingredient payload.
pub fn save_ingredients(recipe_id: &RecipeId, payload: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(&ingredients_key(recipe_id), payload);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (recipe_id, payload);
    }
}

/// Delete the persisted ingredient payload. Used to self-heal after a
/// corrupt value is detected.
pub fn clear_ingredients(recipe_id: &RecipeId) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(&ingredients_key(recipe_id));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = recipe_id;
    }
}
