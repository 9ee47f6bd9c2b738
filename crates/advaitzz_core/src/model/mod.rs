//! Record types shared by expansion, history and export.
//!
//! # Invariants
//! - Records are plain values; nothing here performs I/O.
//! - Serialized field order is stable and matches export column order.

pub mod dork;
pub mod history;
