//! Typed page configuration read once from the host document.
//!
//! DESIGN
//! ======
//! The server marks `<body>` with a `data-page` kind and embeds the page
//! payload in a JSON `<script>` element. Both are parsed eagerly into a
//! typed config at startup; anything missing or malformed yields `None` and
//! the affected screen simply never mounts. Parsing is browser-free so the
//! whole contract is covered by native tests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::types::{Recipe, RecipeNote};

/// Attribute on `<body>` naming the page kind.
pub const PAGE_ATTR: &str = "data-page";

/// Element id of the embedded JSON payload.
pub const PAYLOAD_ELEMENT_ID: &str = "page-data";

/// A validated, non-empty recipe identifier.
///
/// Progress storage keys are derived from this value, so an empty or
/// whitespace-only identifier is rejected at parse time rather than
/// producing keys that collide across recipes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeId(String);

impl RecipeId {
    /// Accept a non-empty identifier, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which screen the server rendered, plus its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum PageConfig {
    /// Recipe generation form.
    Generate,
    /// Freshly generated recipe preview with a save form.
    Result { recipe: Recipe },
    /// Saved recipe with notes.
    RecipeDetail {
        recipe: Recipe,
        notes: Vec<RecipeNote>,
    },
    /// Persistent cook-mode screen.
    Cook { recipe_id: RecipeId, recipe: Recipe },
}

/// Payload shape for pages carrying a single recipe.
#[derive(Deserialize)]
struct RecipePayload {
    recipe: Recipe,
}

/// Payload shape for the recipe-detail page.
#[derive(Deserialize)]
struct DetailPayload {
    recipe: Recipe,
    #[serde(default)]
    notes: Vec<RecipeNote>,
}

impl PageConfig {
    /// Parse a page kind and optional JSON payload into a typed config.
    ///
    /// Unknown kinds, missing payloads, malformed JSON, and (for cook mode)
    /// an empty recipe identifier all yield `None`.
    pub fn parse(kind: &str, payload: Option<&str>) -> Option<Self> {
        match kind {
            "generate" => Some(Self::Generate),
            "result" => {
                let parsed: RecipePayload = serde_json::from_str(payload?).ok()?;
                Some(Self::Result {
                    recipe: parsed.recipe,
                })
            }
            "recipe-detail" => {
                let parsed: DetailPayload = serde_json::from_str(payload?).ok()?;
                Some(Self::RecipeDetail {
                    recipe: parsed.recipe,
                    notes: parsed.notes,
                })
            }
            "cook" => {
                let parsed: RecipePayload = serde_json::from_str(payload?).ok()?;
                let recipe_id = RecipeId::parse(&parsed.recipe.id)?;
                Some(Self::Cook {
                    recipe_id,
                    recipe: parsed.recipe,
                })
            }
            _ => None,
        }
    }

    /// Read the page kind and payload from the live document.
    pub fn from_document() -> Option<Self> {
        #[cfg(feature = "csr")]
        {
            let document = web_sys::window().and_then(|w| w.document())?;
            let kind = document.body().and_then(|body| body.get_attribute(PAGE_ATTR))?;
            let payload = document
                .get_element_by_id(PAYLOAD_ELEMENT_ID)
                .and_then(|el| el.text_content());
            let config = Self::parse(&kind, payload.as_deref());
            if config.is_none() {
                log::debug!("no page mounted for kind {kind:?}");
            }
            config
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}
