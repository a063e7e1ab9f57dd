//! API layer module.
//!
//! HTTP handlers and routing for the dan de engine.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
