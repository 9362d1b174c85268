//! HTTP surface: server wiring, routing, fragment negotiation, HTML rendering.

pub mod app;
pub mod context;
pub mod middleware;
pub mod render;
