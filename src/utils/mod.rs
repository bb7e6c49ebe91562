//! Utility functions for formatting.

pub mod formatting;

pub use formatting::{format_event_time, format_memory_mb, format_size, get_current_memory_mb};
