//! Page modules for route-level screens.

pub mod create_point;
pub mod home;
