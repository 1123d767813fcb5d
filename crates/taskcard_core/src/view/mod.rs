//! Presentation formatting derived from domain records.
//!
//! # Responsibility
//! - Turn tasks into display strings identical on every platform.
//! - Keep UI runtimes free of time-zone and number formatting rules.

pub mod card;
pub mod format;
