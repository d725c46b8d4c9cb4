//! Cache Entry Module
//!
//! Defines a single cached transformation together with its insertion time.

// == Cache Entry ==
/// A cached transformation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Composite cache key (text plus tone)
    pub key: String,
    /// The transformed text
    pub value: String,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Position in the insertion order, higher is newer
    pub(crate) seq: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry inserted at `now_ms`.
    pub fn new(key: String, value: String, now_ms: u64, seq: u64) -> Self {
        Self {
            key,
            value,
            inserted_at: now_ms,
            seq,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since insertion, saturating at zero if the clock
    /// moved backwards.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl_ms` at `now_ms`.
    ///
    /// Boundary condition: an entry whose age is exactly the TTL is still
    /// live; it expires only once the age strictly exceeds the TTL.
    pub fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry_at(inserted_at: u64) -> CacheEntry {
        CacheEntry::new("k".to_string(), "v".to_string(), inserted_at, 0)
    }

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("key".to_string(), "value".to_string(), 1_000, 7);

        assert_eq!(entry.key, "key");
        assert_eq!(entry.value, "value");
        assert_eq!(entry.inserted_at, 1_000);
        assert_eq!(entry.seq, 7);
    }

    #[test]
    fn test_entry_not_expired_within_ttl() {
        let entry = entry_at(10_000);
        assert!(!entry.is_expired(10_500, 1_000));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = entry_at(10_000);

        // Exactly at the TTL the entry is still served
        assert!(!entry.is_expired(11_000, 1_000));
        // One millisecond later it is gone
        assert!(entry.is_expired(11_001, 1_000));
    }

    #[test]
    fn test_age_saturates_when_clock_goes_backwards() {
        let entry = entry_at(10_000);
        assert_eq!(entry.age_ms(5_000), 0);
        assert!(!entry.is_expired(5_000, 0));
    }

    #[test]
    fn test_current_timestamp_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(current_timestamp_ms() > 1_577_836_800_000);
    }
}
