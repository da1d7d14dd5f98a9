//! Root application component dispatching on the host page kind.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routing belongs to the server; each screen arrives as a fully served
//! document. The root component reads the page configuration embedded in
//! that document exactly once and mounts the matching page component, so an
//! unrecognized or malformed host page renders nothing rather than failing.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::pages::cook::CookPage;
use crate::pages::generate::GeneratePage;
use crate::pages::recipe_detail::RecipeDetailPage;
use crate::pages::result::ResultPage;

/// Root component: one page component per recognized host page.
#[component]
pub fn App() -> impl IntoView {
    match PageConfig::from_document() {
        Some(PageConfig::Generate) => view! { <GeneratePage/> }.into_any(),
        Some(PageConfig::Result { recipe }) => view! { <ResultPage recipe/> }.into_any(),
        Some(PageConfig::RecipeDetail { recipe, notes }) => {
            view! { <RecipeDetailPage recipe notes/> }.into_any()
        }
        Some(PageConfig::Cook { recipe_id, recipe }) => {
            view! { <CookPage recipe_id recipe/> }.into_any()
        }
        None => ().into_any(),
    }
}
