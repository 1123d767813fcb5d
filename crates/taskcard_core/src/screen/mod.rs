//! Screen-scoped presentation state.
//!
//! # Responsibility
//! - Hold UI state with an explicit mount/unmount lifecycle.
//! - Notify UI runtimes of list changes through subscriptions.
//!
//! # Invariants
//! - All mutation happens synchronously on the caller's thread.

pub mod observable;
pub mod task_list;
