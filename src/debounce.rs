//! Debounced handler wrappers
//!
//! Chord resolution can fire an action twice in quick succession when a
//! user mashes the suffix key; handlers that trigger navigation or clicks
//! want at most one invocation per burst. `debounced` wraps any handler so
//! repeat calls inside the interval are swallowed.

use std::time::{Duration, Instant};

/// Default debounce interval for click-style handlers
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(300);

/// Wrap a handler so calls within [`DEBOUNCE_INTERVAL`] of the last
/// accepted call are ignored
pub fn debounced<F: FnMut() + 'static>(handler: F) -> impl FnMut() {
    debounced_with(handler, DEBOUNCE_INTERVAL)
}

/// Wrap a handler with a custom debounce interval
pub fn debounced_with<F: FnMut() + 'static>(mut handler: F, interval: Duration) -> impl FnMut() {
    let mut last_accepted: Option<Instant> = None;
    move || {
        let now = Instant::now();
        if let Some(last) = last_accepted {
            if now.duration_since(last) < interval {
                return;
            }
        }
        last_accepted = Some(now);
        handler();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_swallows_calls_inside_interval() {
        let count = Rc::new(Cell::new(0));
        let clone = Rc::clone(&count);
        let mut handler = debounced_with(move || clone.set(clone.get() + 1), Duration::from_secs(60));

        handler();
        handler();
        handler();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_passes_calls_outside_interval() {
        let count = Rc::new(Cell::new(0));
        let clone = Rc::clone(&count);
        let mut handler = debounced_with(move || clone.set(clone.get() + 1), Duration::from_millis(10));

        handler();
        std::thread::sleep(Duration::from_millis(20));
        handler();
        assert_eq!(count.get(), 2);
    }
}
