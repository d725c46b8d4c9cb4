//! Cache Module
//!
//! Bounded response cache with lazy TTL expiry and FIFO eviction.

mod entry;
mod fifo;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use fifo::InsertionOrder;
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Default maximum number of resident entries
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default entry lifetime in seconds (one hour)
pub const DEFAULT_TTL_SECS: u64 = 3600;
