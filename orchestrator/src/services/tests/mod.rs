//! Service-specific tests


pub mod common {
    use std::time::Duration;

    /// Lookup deadline used by tests that expect a timeout
    pub const SHORT_TIMEOUT: Duration = Duration::from_millis(200);

    /// Deadline for tests that should never hit it
    pub const GENEROUS_TIMEOUT: Duration = Duration::from_secs(5);
}
