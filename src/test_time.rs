// Used for testing where a fixed time is needed instead of the system clock.
// This allows us to assert exact header contents regardless of the current time.

#![cfg(test)]

use crate::time::TimeProvider;

/// 2023-11-14 22:13:20 UTC
pub const FIXED_UNIX_SECONDS: i64 = 1_700_000_000;

/// A fixed time provider for testing purposes.
/// This provider always returns [FIXED_UNIX_SECONDS].
pub struct FixedTimeProvider;

impl TimeProvider for FixedTimeProvider {
    fn unix_seconds(&self) -> i64 {
        FIXED_UNIX_SECONDS
    }
}
