//! # Triage Core
//!
//! Core business logic for the ward triage simulator.
//!
//! This crate contains pure in-memory data operations:
//! - Patient registration and urgency-ordered waiting (binary heap)
//! - Attendance history with undo (stack discipline)
//! - A permanent registry of every registration
//!
//! **No presentation concerns**: menus, input parsing and text rendering
//! belong in `triage-cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod patient;
pub mod triage;

pub use config::CoreConfig;
pub use error::{TriageError, TriageResult};
pub use patient::{Patient, TriageColour};
pub use triage::{Attendance, TriageService};

// Re-export the shared text types so downstream crates take them from one place.
pub use triage_types::{NonEmptyText, TextError};
