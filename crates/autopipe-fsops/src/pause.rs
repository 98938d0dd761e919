//! Blocking pause used by the wait primitive.

use std::thread;
use std::time::Duration;

/// Blocks the calling thread. Swapped out in tests to avoid real sleeps.
pub trait Pause {
    /// Block for `duration`.
    fn pause(&self, duration: Duration);
}

/// [`Pause`] backed by [`std::thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn thread_pause_blocks_for_at_least_the_duration() {
        let started = Instant::now();
        ThreadPause.pause(Duration::from_millis(20));
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
