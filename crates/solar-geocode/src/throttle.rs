//! Pacing between consecutive geocoding requests.

use std::time::Duration;

/// Waits between requests to respect a provider's usage policy.
pub trait Throttle {
    fn pause(&self, delay: Duration);
}

/// Blocks the current thread for the requested delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Throttle for ThreadSleep {
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl<T: Throttle + ?Sized> Throttle for &T {
    fn pause(&self, delay: Duration) {
        (**self).pause(delay);
    }
}
