//! Basic step-card navigator without persistence.
//!
//! Shows exactly one card at a time with previous/next controls; the
//! boundary control on each side is disabled rather than wrapping. Used for
//! step previews outside cook mode.

use leptos::prelude::*;

use crate::state::navigator::StepNavigator;

/// Step cards with previous/next controls.
///
/// Renders nothing for an empty step list.
#[component]
pub fn StepCards(steps: Vec<String>) -> impl IntoView {
    let Some(initial) = StepNavigator::new(steps.len()) else {
        return ().into_any();
    };
    let nav = RwSignal::new(initial);

    let cards = steps
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

    view! {
        <div class="step-cards">
            {cards}
            <div class="step-nav">
                <button
                    id="prev-step"
                    disabled=move || nav.get().at_first()
                    on:click=move |_| {
                        nav.update(|n| {
                            n.go_previous();
                        });
                    }
                >
                    "Previous"
                </button>
                <button
                    id="next-step"
                    disabled=move || nav.get().at_last()
                    on:click=move |_| {
                        nav.update(|n| {
                            n.go_next();
                        });
                    }
                >
                    "Next"
                </button>
            </div>
        </div>
    }
    .into_any()
}
