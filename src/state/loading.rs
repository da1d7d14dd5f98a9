//! Busy-label resolution for submitting forms.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Label used when neither an override nor idle button text is available.
pub const FALLBACK_LABEL: &str = "Working";

/// Resolve the label shown on a submit button while its form is in flight.
///
/// Priority: explicit override, else the button's idle text, else
/// [`FALLBACK_LABEL`]; the result always carries a trailing ellipsis.
pub fn busy_label(override_label: Option<&str>, idle_text: &str) -> String {
    let base = override_label
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| {
            let idle = idle_text.trim();
            if idle.is_empty() { FALLBACK_LABEL } else { idle }
        });
    format!("{base}...")
}
