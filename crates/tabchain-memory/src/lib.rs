//! tabchain Memory Accounting
//!
//! Provides the megabyte quantity carried by every tab, the pressure
//! levels reported against a memory budget, and running statistics
//! kept by the tab list.

mod pressure;
mod stats;
mod usage;

pub use pressure::MemoryPressureLevel;
pub use stats::MemoryStats;
pub use usage::{MemoryError, MemoryUsage};
