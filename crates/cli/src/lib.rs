//! Presentation layer for the triage simulator.
//!
//! Everything here is glue around `triage-core`: menu handling, input
//! validation, text rendering and the scripted demo. State only changes
//! through the core service's operations.

pub mod console;
pub mod demo;
pub mod render;
