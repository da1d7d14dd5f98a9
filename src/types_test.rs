use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_recipe() -> Recipe {
    Recipe {
        id: "note-ui".to_owned(),
        title: "Chickpea Bowl".to_owned(),
        servings: 2,
        time_minutes: 20,
        difficulty: "easy".to_owned(),
        ingredients: vec![RecipeIngredient {
            name: "chickpeas".to_owned(),
            amount: "1".to_owned(),
            unit: "can".to_owned(),
            optional: false,
        }],
        steps: vec![RecipeStep {
            step: 1,
            text: "Warm chickpeas.".to_owned(),
            timer_minutes: Some(5),
        }],
        substitutions: vec!["Use white beans.".to_owned()],
        cook_mode: CookModeContent {
            ingredients_checklist: vec!["chickpeas".to_owned()],
            step_cards: vec!["Warm chickpeas.".to_owned()],
        },
    }
}

// =============================================================
// Serde round-trips
// =============================================================

#[test]
fn recipe_round_trips_through_json() {
    let recipe = make_recipe();
    let encoded = serde_json::to_string(&recipe).unwrap();
    let decoded: Recipe = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, recipe);
}

#[test]
fn recipe_deserializes_the_server_shape() {
    let raw = r#"{
        "id": "note-ui",
        "title": "Chickpea Bowl",
        "servings": 2,
        "time_minutes": 20,
        "difficulty": "easy",
        "ingredients": [
            {"name": "chickpeas", "amount": "1", "unit": "can", "optional": false}
        ],
        "steps": [
            {"step": 1, "text": "Warm chickpeas.", "timer_minutes": 5}
        ],
        "substitutions": ["Use white beans."],
        "cook_mode": {
            "ingredients_checklist": ["chickpeas"],
            "step_cards": ["Warm chickpeas."]
        }
    }"#;
    let decoded: Recipe = serde_json::from_str(raw).unwrap();
    assert_eq!(decoded, make_recipe());
}

#[test]
fn optional_ingredient_flag_defaults_to_false() {
    let raw = r#"{"name": "salt", "amount": "1", "unit": "pinch"}"#;
    let decoded: RecipeIngredient = serde_json::from_str(raw).unwrap();
    assert!(!decoded.optional);
}

#[test]
fn step_timer_defaults_to_none() {
    let raw = r#"{"step": 2, "text": "Serve."}"#;
    let decoded: RecipeStep = serde_json::from_str(raw).unwrap();
    assert_eq!(decoded.timer_minutes, None);
}

#[test]
fn note_round_trips_through_json() {
    let note = RecipeNote {
        id: "n-1".to_owned(),
        note_text: "Nice with extra lemon".to_owned(),
        created_at: "2024-05-01T12:00:00Z".to_owned(),
    };
    let encoded = serde_json::to_string(&note).unwrap();
    let decoded: RecipeNote = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, note);
}
