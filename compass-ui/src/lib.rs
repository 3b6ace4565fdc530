//! compass-ui - Shared UI types and components for Cash Compass
//!
//! Contains display types and pure view components used by both the web app
//! and the fixture-data demo. Components here never fetch data or touch the
//! router; navigation is surfaced through callbacks.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
