//! Client-side state for the registration flow.
//!
//! ARCHITECTURE
//! ============
//! Selection and cascade rules live in plain structs with methods so the
//! page components stay thin and the rules stay testable without a DOM.

pub mod geo;
pub mod registration;
