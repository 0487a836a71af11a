//! Network layer: REST helpers over `gloo-net`.

pub mod api;
