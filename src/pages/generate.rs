//! Recipe generation form page.

use leptos::prelude::*;

use crate::components::loading_form::LoadingForm;

/// Landing page: a form posting generation options to the server.
#[component]
pub fn GeneratePage() -> impl IntoView {
    view! {
        <main class="page page--generate">
            <h1>"Recipe Chat"</h1>
            <LoadingForm
                action="/ui/generate"
                submit_text="Generate recipe"
                submit_label="Generating".to_owned()
            >
                <label class="field">
                    <span>"Theme"</span>
                    <input type="text" name="theme" placeholder="Italian"/>
                </label>
                <label class="field">
                    <span>"Ingredients"</span>
                    <textarea
                        name="ingredients"
                        rows="4"
                        placeholder="chicken\nspinach\nlemon"
                    ></textarea>
                </label>
                <label class="field field--checkbox">
                    <input type="checkbox" name="healthy"/>
                    <span>"Healthy"</span>
                </label>
                <label class="field field--checkbox">
                    <input type="checkbox" name="quick_easy"/>
                    <span>"Quick & easy"</span>
                </label>
            </LoadingForm>
            <a href="/recipes/ui">"Saved recipes"</a>
        </main>
    }
}
