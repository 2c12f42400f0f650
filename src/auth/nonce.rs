//! Nonce generation for Bitstamp API authentication.
//!
//! Bitstamp requires a strictly increasing nonce for each authenticated
//! request to prevent replay attacks. The nonce is the current time in
//! milliseconds followed by a four digit, zero padded sequence number, so
//! calls landing in the same millisecond still get distinct, ordered values:
//!
//! ```text
//! 1600000000000 0000
//! 1600000000000 0001
//! 1600000000001 0000
//! ```
//!
//! The sequence keeps a fixed width for the first 10 000 calls within one
//! millisecond. Past that the string grows by a digit and ordering against
//! shorter nonces of the same millisecond is no longer guaranteed. The bound
//! is kept as is since the server compares nonces by value and the length is
//! part of the wire format.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
///
/// The nonce must be strictly increasing for each request.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be greater than any previously returned value.
    fn next_nonce(&self) -> String;
}

type Clock = Box<dyn Fn() -> u64 + Send + Sync>;

#[derive(Debug, Default)]
struct NonceState {
    last_timestamp_millis: u64,
    counter: u64,
}

/// A nonce provider combining the millisecond clock with a sequence number.
///
/// The state sits behind a mutex, so one generator may be shared between
/// concurrent callers without breaking the ordering.
pub struct NonceGenerator {
    state: Mutex<NonceState>,
    clock: Clock,
}

impl NonceGenerator {
    /// Create a new nonce generator reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(current_time_millis)
    }

    /// Create a nonce generator with a custom millisecond clock.
    pub fn with_clock(clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        Self {
            state: Mutex::new(NonceState::default()),
            clock: Box::new(clock),
        }
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NonceGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonceGenerator").finish_non_exhaustive()
    }
}

impl NonceProvider for NonceGenerator {
    fn next_nonce(&self) -> String {
        // The state is always left consistent, so a poisoned lock is still usable.
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let now = (self.clock)();

        if now == state.last_timestamp_millis {
            state.counter += 1;
        } else {
            state.last_timestamp_millis = now;
            state.counter = 0;
        }

        format!("{}{:04}", now, state.counter)
    }
}

/// Get current time in milliseconds since UNIX epoch.
fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
