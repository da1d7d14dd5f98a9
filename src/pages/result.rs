//! Generated-recipe preview with a save form.

use leptos::prelude::*;

use crate::components::loading_form::LoadingForm;
use crate::components::step_cards::StepCards;
use crate::types::Recipe;

/// Preview of a freshly generated recipe.
///
/// Steps are browsable through the basic card navigator; the save form
/// posts the recipe back to the server as serialized JSON.
#[component]
pub fn ResultPage(recipe: Recipe) -> impl IntoView {
    // Fail-open: an unserializable recipe posts an empty payload, which the
    // server rejects as invalid.
    let recipe_json = serde_json::to_string(&recipe).unwrap_or_default();

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|item| {
            let mut line = format!("{} {} {}", item.amount, item.unit, item.name);
            if item.optional {
                line.push_str(" (optional)");
            }
            view! { <li>{line}</li> }
        })
        .collect_view();

    let substitutions = (!recipe.substitutions.is_empty()).then(|| {
        let items = recipe
            .substitutions
            .iter()
            .cloned()
            .map(|text| view! { <li>{text}</li> })
            .collect_view();
        view! {
            <section class="substitutions">
                <h2>"Substitutions"</h2>
                <ul>{items}</ul>
            </section>
        }
    });

    view! {
        <main class="page page--result">
            <h1>{recipe.title.clone()}</h1>
            <ul class="recipe-meta">
                <li>{format!("Serves {}", recipe.servings)}</li>
                <li>{format!("{} min", recipe.time_minutes)}</li>
                <li>{recipe.difficulty.clone()}</li>
            </ul>
            <section class="ingredients">
                <h2>"Ingredients"</h2>
                <ul>{ingredients}</ul>
            </section>
            <section class="steps-preview">
                <h2>"Steps"</h2>
                <StepCards steps=recipe.cook_mode.step_cards.clone()/>
            </section>
            {substitutions}
            <LoadingForm action="/ui/save" submit_text="Save recipe" submit_label="Saving".to_owned()>
                <input type="hidden" name="recipe_json" value=recipe_json/>
            </LoadingForm>
        </main>
    }
}
