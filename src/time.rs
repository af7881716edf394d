use chrono::offset::Utc;

/// The single piece of ambient state the generator touches. Injected rather than
/// read as a global so tests can pin the clock.
pub trait TimeProvider {
    /// Whole seconds since the Unix epoch, fractional seconds truncated
    fn unix_seconds(&self) -> i64;
}

/// Production clock backed by the system time
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn unix_seconds(&self) -> i64 {
        // timestamp() floors, which matches the truncation the consuming build expects
        Utc::now().timestamp()
    }
}
