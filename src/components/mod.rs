//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their signals and storage wiring; the mutation and
//! validation rules live in `state` so behavior stays natively testable.

pub mod cook_mode;
pub mod loading_form;
pub mod step_cards;
