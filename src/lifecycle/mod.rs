//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Env overrides → Validate → Init logging → Notice (once)
//! ```
//!
//! # Design Decisions
//! - Startup state is owned by the host process, not a global
//! - Fail fast: any startup error is fatal

pub mod startup;

pub use startup::Startup;
