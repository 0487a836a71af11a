//! Pure helpers shared across pages and components.

pub mod mercator;
