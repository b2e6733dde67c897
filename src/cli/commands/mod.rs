//! Command implementations.

pub mod close;
pub mod complete;
pub mod complete_open;
pub mod list;
pub mod state;
