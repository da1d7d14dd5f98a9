//! Persistent cook-mode panel: checklist plus step navigation.
//!
//! DESIGN
//! ======
//! Progress is scoped per recipe in localStorage and restored before the
//! first render: the step index is range-checked against the card count,
//! and a corrupt ingredient payload is deleted so it cannot keep poisoning
//! later visits. Navigation and checklist changes persist immediately, and
//! a boundary press writes nothing.

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::config::RecipeId;
use crate::state::checklist::{self, ChecklistRestore};
use crate::state::navigator::StepNavigator;
use crate::types::CookModeContent;
use crate::util::progress;

/// Cook-mode panel for one recipe.
///
/// Renders nothing when the recipe has no step cards.
#[component]
pub fn CookModePanel(recipe_id: RecipeId, content: CookModeContent) -> impl IntoView {
    let stored_step = progress::load_step(&recipe_id);
    let Some(initial) = StepNavigator::restore(content.step_cards.len(), stored_step.as_deref())
    else {
        return ().into_any();
    };

    let initial_checked = match ChecklistRestore::decode(
        progress::load_ingredients(&recipe_id).as_deref(),
    ) {
        ChecklistRestore::Applied(indexes) => indexes,
        ChecklistRestore::Absent => BTreeSet::new(),
        ChecklistRestore::Corrupt => {
            #[cfg(feature = "csr")]
            log::warn!(
                "discarding corrupt ingredient progress for recipe {}",
                recipe_id.as_str()
            );
            progress::clear_ingredients(&recipe_id);
            BTreeSet::new()
        }
    };

    // Re-persist the restored (possibly defaulted) step before first render
    // so storage and UI agree from the start.
    progress::save_step(&recipe_id, initial.index());

    let nav = RwSignal::new(initial);
    let checked = RwSignal::new(initial_checked);

    let checklist_items = content
        .ingredients_checklist
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let recipe_id = recipe_id.clone();
            view! {
                <li class="checklist-item">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || checked.get().contains(&i)
                            on:change=move |_| {
                                checked.update(|set| checklist::toggle(set, i));
                                let payload = checked.with_untracked(checklist::encode);
                                progress::save_ingredients(&recipe_id, &payload);
                            }
                        />
                        <span>{name}</span>
                    </label>
                </li>
            }
        })
        .collect_view();

    let cards = content
        .step_cards
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            view! {
                <section class="step-card" class:hidden=move || nav.get().index() != i>
                    <p>{text}</p>
                </section>
            }
        })
        .collect_view();

    let on_previous = {
        let recipe_id = recipe_id.clone();
        move |_| {
            nav.update(|n| {
                if n.go_previous() {
                    progress::save_step(&recipe_id, n.index());
                }
            });
        }
    };
    let on_next = {
        let recipe_id = recipe_id.clone();
        move |_| {
            nav.update(|n| {
                if n.go_next() {
                    progress::save_step(&recipe_id, n.index());
                }
            });
        }
    };

    view! {
        <div class="cook-mode">
            <section class="cook-mode__checklist">
                <h2>"Ingredients"</h2>
                <ul>{checklist_items}</ul>
            </section>
            <section class="cook-mode__steps">
                <p class="step-counter">{move || nav.get().counter_label()}</p>
                {cards}
                <div class="step-nav">
                    <button
                        id="prev-step"
                        disabled=move || nav.get().at_first()
                        on:click=on_previous
                    >
                        "Previous"
                    </button>
                    <button
                        id="next-step"
                        disabled=move || nav.get().at_last()
                        on:click=on_next
                    >
                        "Next"
                    </button>
                </div>
            </section>
        </div>
    }
    .into_any()
}
