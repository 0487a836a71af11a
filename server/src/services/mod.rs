//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic, persistence, and upstream HTTP
//! concerns so route handlers can stay focused on protocol translation.

pub mod geo;
pub mod item;
pub mod point;
