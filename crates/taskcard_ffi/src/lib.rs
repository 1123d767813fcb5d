//! Flutter bridge for the task card core.

pub mod api;
