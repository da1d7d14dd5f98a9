//! Saved-recipe detail page with notes.

use leptos::prelude::*;

use crate::components::loading_form::LoadingForm;
use crate::types::{Recipe, RecipeNote};

/// Full view of a saved recipe: ingredients, numbered steps, substitutions,
/// and the notes thread with its add-note form.
#[component]
pub fn RecipeDetailPage(recipe: Recipe, notes: Vec<RecipeNote>) -> impl IntoView {
    let cook_href = format!("/cook/{}", recipe.id);
    let notes_action = format!("/recipes/ui/{}/notes", recipe.id);

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

    let steps = recipe
        .steps
        .iter()
        .map(|step| {
            let timer = step
                .timer_minutes
                .map(|minutes| view! { <span class="timer-hint">{format!(" ({minutes} min)")}</span> });
            view! { <li>{step.text.clone()}{timer}</li> }
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

    let notes_view = if notes.is_empty() {
        view! { <p class="notes-empty">"No notes yet."</p> }.into_any()
    } else {
        let items = notes
            .into_iter()
            .map(|note| {
                view! {
                    <li class="note">
                        <p>{note.note_text}</p>
                        <time>{note.created_at}</time>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="notes-list">{items}</ul> }.into_any()
    };

    view! {
        <main class="page page--detail">
            <h1>{recipe.title.clone()}</h1>
            <ul class="recipe-meta">
                <li>{format!("Serves {}", recipe.servings)}</li>
                <li>{format!("{} min", recipe.time_minutes)}</li>
                <li>{recipe.difficulty.clone()}</li>
            </ul>
            <a class="cook-link" href=cook_href>"Start cooking"</a>
            <section class="ingredients">
                <h2>"Ingredients"</h2>
                <ul>{ingredients}</ul>
            </section>
            <section class="steps">
                <h2>"Steps"</h2>
                <ol>{steps}</ol>
            </section>
            {substitutions}
            <section class="notes">
                <h2>"Notes"</h2>
                {notes_view}
                <LoadingForm action=notes_action submit_text="Add note">
                    <textarea name="note_text" rows="2" placeholder="Nice with extra lemon"></textarea>
                </LoadingForm>
            </section>
        </main>
    }
}
