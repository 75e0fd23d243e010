use jiff::Timestamp;
#[cfg(any(test, feature = "test-util"))]
pub use manual::ManualClock;

/// Source of creation timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current time of the clock
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(any(test, feature = "test-util"))]
mod manual {
    use super::Clock;
    use jiff::{SignedDuration, Timestamp};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// A clock that only moves when told to.
    ///
    /// Clones share the same time, so a test can keep one handle and give the
    /// other to a registry.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Arc<Mutex<Timestamp>>,
    }

    impl ManualClock {
        pub fn new(now: Timestamp) -> Self {
            Self {
                now: Arc::new(Mutex::new(now)),
            }
        }

        /// Moves the clock to `target`. Earlier targets are ignored.
        pub fn advance_to(&self, target: Timestamp) {
            let mut now = self.now.lock();
            if target > *now {
                *now = target;
            }
        }

        /// Moves the clock forward by `duration`.
        pub fn advance(&self, duration: SignedDuration) {
            let mut now = self.now.lock();
            if let Ok(next) = now.checked_add(duration) {
                if next > *now {
                    *now = next;
                }
            }
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Timestamp {
            *self.now.lock()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    #[test]
    fn manual_clock_works() {
        // test that the clock starts at the given time
        let base = Timestamp::from_second(0).unwrap();
        let clock = ManualClock::new(base);
        assert_eq!(clock.now(), base);

        // the clock should advance to the target time
        let target = Timestamp::from_second(1000).unwrap();
        clock.advance_to(target);
        assert_eq!(clock.now(), target);

        // but never backwards
        clock.advance_to(base);
        assert_eq!(clock.now(), target);
    }

    #[test]
    fn clones_share_time() {
        let clock = ManualClock::new(Timestamp::from_second(10).unwrap());
        let handle = clock.clone();

        handle.advance(SignedDuration::from_secs(5));
        assert_eq!(clock.now(), Timestamp::from_second(15).unwrap());
    }

    #[test]
    fn system_clock_is_close_to_now() {
        let before = Timestamp::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
