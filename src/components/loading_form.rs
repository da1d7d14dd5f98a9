//! Form wrapper that indicates an in-flight submission.
//!
//! TRADE-OFFS
//! ==========
//! The busy state is never reverted: submission hands control to the
//! server, which answers with a navigation that resets all page state. A
//! client-side validation failure therefore leaves the button disabled;
//! that matches the served pages, where every opted-in form posts natively.

use leptos::prelude::*;

use crate::state::loading::busy_label;

/// A native form whose submit button disables itself on submission.
///
/// While busy the button carries `aria-busy="true"` and shows
/// `"<label>..."`, where the label is the `submit_label` override when
/// given, otherwise the idle button text. Submission itself is never
/// prevented.
#[component]
pub fn LoadingForm(
    /// Server endpoint the form posts to.
    #[prop(into)]
    action: String,
    /// Idle text of the submit button.
    #[prop(into)]
    submit_text: String,
    /// Optional override for the busy label.
    #[prop(optional, into)]
    submit_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let busy = RwSignal::new(false);

    let label = move || {
        if busy.get() {
            busy_label(submit_label.as_deref(), &submit_text)
        } else {
            submit_text.clone()
        }
    };

    view! {
        <form class="loading-form" action=action method="post" on:submit=move |_| busy.set(true)>
            {children()}
            <button
                type="submit"
                disabled=move || busy.get()
                aria-busy=move || if busy.get() { "true" } else { "false" }
            >
                {label}
            </button>
        </form>
    }
}
