//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Table compilation (at startup):
//!     Vec<Record> (source order)
//!     → table.rs (insert in order, later paths overwrite earlier ones)
//!     → Freeze as immutable RedirectTable
//!
//! Per request:
//!     request path
//!     → RedirectTable::resolve (exact match)
//!     → Some(destination) or no match
//! ```
//!
//! # Design Decisions
//! - Table built once, immutable at runtime (shared via Arc, no locks)
//! - Exact string match only: no trailing-slash, case or query normalization
//! - Empty destinations behave exactly like missing paths

pub mod table;

pub use table::RedirectTable;
