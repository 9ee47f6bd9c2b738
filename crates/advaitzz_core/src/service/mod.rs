//! Use-case services.
//!
//! # Responsibility
//! - Expand templates into dork records.
//! - Orchestrate expansion and history recording for front ends.

pub mod dork_service;
pub mod expander;
