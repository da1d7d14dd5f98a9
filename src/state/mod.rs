//! Pure UI state for the recipe screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules hold no DOM or storage handles; components own the signals
//! and the storage wiring. Keeping the mutation and validation rules here
//! lets the full behavior contract run under native tests.

pub mod checklist;
pub mod loading;
pub mod navigator;
