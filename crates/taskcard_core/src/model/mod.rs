//! Domain model for the task screen.
//!
//! # Responsibility
//! - Define the immutable `Task` and `Interval` records.
//! - Keep validation at construction so invalid values never exist.
//!
//! # Invariants
//! - Every task owns exactly one interval.
//! - Neither record exposes a mutation API.

pub(crate) mod duration_ms;
pub mod interval;
pub mod task;
