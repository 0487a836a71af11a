//! Reusable view components for the registration form.

pub mod item_grid;
pub mod location_map;
