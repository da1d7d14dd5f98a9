//! Cook-mode screen.

use leptos::prelude::*;

use crate::components::cook_mode::CookModePanel;
use crate::config::RecipeId;
use crate::types::Recipe;

/// Step-by-step cooking view with per-recipe persisted progress.
#[component]
pub fn CookPage(recipe_id: RecipeId, recipe: Recipe) -> impl IntoView {
    let back_href = format!("/recipes/ui/{}", recipe.id);
    view! {
        <main class="page page--cook">
            <h1>{recipe.title}</h1>
            <a class="back-link" href=back_href>"Back to recipe"</a>
            <CookModePanel recipe_id content=recipe.cook_mode/>
        </main>
    }
}
