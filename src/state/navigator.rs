//! Step-by-step navigation over a fixed sequence of cards.
//!
//! DESIGN
//! ======
//! Exactly one card is active at a time and navigation clamps at both ends.
//! Restoring from storage validates the persisted index against the card
//! count so a stale or corrupted value degrades to the first step.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

/// Position within an ordered, fixed-size sequence of step cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepNavigator {
    index: usize,
    count: usize,
}

impl StepNavigator {
    /// Build a navigator at the first step.
    ///
    /// Returns `None` for an empty sequence; callers treat that as the
    /// disabled sentinel and skip the whole component.
    pub fn new(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self { index: 0, count })
    }

    /// Build a navigator from a previously persisted step value.
    ///
    /// The stored value counts only if it parses as an integer within
    /// `[0, count)`; anything else falls back to the first step.
    pub fn restore(count: usize, stored: Option<&str>) -> Option<Self> {
        let mut nav = Self::new(count)?;
        if let Some(index) = stored
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|index| *index < count)
        {
            nav.index = index;
        }
        Some(nav)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the "previous" control should be disabled.
    pub fn at_first(&self) -> bool {
        self.index == 0
    }

    /// Whether the "next" control should be disabled.
    pub fn at_last(&self) -> bool {
        self.index == self.count - 1
    }

    /// Step backward. Returns `true` if the index changed; a press at the
    /// first step is a no-op.
    pub fn go_previous(&mut self) -> bool {
        if self.at_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward. Returns `true` if the index changed; a press at the
    /// last step is a no-op.
    pub fn go_next(&mut self) -> bool {
        if self.at_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Human-readable 1-based counter, e.g. `"Step 2 of 7"`.
    pub fn counter_label(&self) -> String {
        format!("Step {} of {}", self.index + 1, self.count)
    }
}
