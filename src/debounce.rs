//! Quiet-period debouncing over an injected timer host.
//!
//! The debouncer itself is timer-agnostic: [`TimerHost`] abstracts the
//! one-shot delayed callback so the same logic runs on the GLib main
//! loop in the application and on a hand-cranked clock in tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// One-shot delayed-callback scheduler.
///
/// Implementations are main-thread only; callbacks run on the same
/// thread that scheduled them.
pub trait TimerHost {
    /// Opaque handle for a scheduled, not-yet-fired callback.
    type Handle;

    /// Run `callback` once after `delay`.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancel a pending callback. Only ever called with a handle whose
    /// callback has not fired.
    fn cancel(&self, handle: Self::Handle);
}

/// Wraps an action so it only runs after a quiet period.
///
/// Every [`call`](Debouncer::call) records the latest arguments and
/// restarts the pending timer; the action fires once with those
/// arguments after `wait` has elapsed with no further calls.
pub struct Debouncer<A, H: TimerHost> {
    host: H,
    wait: Duration,
    action: Rc<dyn Fn(A)>,
    latest: Rc<RefCell<Option<A>>>,
    pending: Rc<RefCell<Option<H::Handle>>>,
}

impl<A: 'static, H: TimerHost> Debouncer<A, H>
where
    H::Handle: 'static,
{
    pub fn new(host: H, wait: Duration, action: impl Fn(A) + 'static) -> Self {
        Self {
            host,
            wait,
            action: Rc::new(action),
            latest: Rc::new(RefCell::new(None)),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Record `args` and restart the quiet-period timer.
    pub fn call(&self, args: A) {
        *self.latest.borrow_mut() = Some(args);

        if let Some(handle) = self.pending.borrow_mut().take() {
            self.host.cancel(handle);
        }

        let action = self.action.clone();
        let latest = self.latest.clone();
        let pending = self.pending.clone();

        let handle = self.host.schedule(
            self.wait,
            Box::new(move || {
                // The handle is spent; drop it before running the action
                // so a re-entrant call() never cancels a dead timer.
                pending.borrow_mut().take();
                if let Some(args) = latest.borrow_mut().take() {
                    action(args);
                }
            }),
        );

        *self.pending.borrow_mut() = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Hand-cranked timer host with a fake millisecond clock.
    #[derive(Clone, Default)]
    struct FakeTimers {
        inner: Rc<FakeInner>,
    }

    #[derive(Default)]
    struct FakeInner {
        now_ms: Cell<u64>,
        next_id: Cell<u64>,
        #[allow(clippy::type_complexity)]
        queue: RefCell<Vec<(u64, u64, Box<dyn FnOnce()>)>>,
    }

    impl FakeTimers {
        fn advance(&self, ms: u64) {
            let deadline = self.inner.now_ms.get() + ms;
            loop {
                let due = {
                    let mut queue = self.inner.queue.borrow_mut();
                    let next = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _, _))| *at <= deadline)
                        .min_by_key(|(_, (at, id, _))| (*at, *id))
                        .map(|(idx, _)| idx);
                    next.map(|idx| queue.remove(idx))
                };

                match due {
                    Some((at, _, callback)) => {
                        self.inner.now_ms.set(at);
                        callback();
                    }
                    None => break,
                }
            }
            self.inner.now_ms.set(deadline);
        }
    }

    impl TimerHost for FakeTimers {
        type Handle = u64;

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> u64 {
            let id = self.inner.next_id.get();
            self.inner.next_id.set(id + 1);
            let at = self.inner.now_ms.get() + delay.as_millis() as u64;
            self.inner.queue.borrow_mut().push((at, id, callback));
            id
        }

        fn cancel(&self, handle: u64) {
            self.inner.queue.borrow_mut().retain(|(_, id, _)| *id != handle);
        }
    }

    #[test]
    fn test_rapid_calls_collapse_to_last() {
        let timers = FakeTimers::default();
        let fired: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = fired.clone();
        let debounced = Debouncer::new(timers.clone(), Duration::from_millis(100), move |n| {
            sink.borrow_mut().push(n);
        });

        // Calls at t=0, t=30, t=60
        debounced.call(1);
        timers.advance(30);
        debounced.call(2);
        timers.advance(30);
        debounced.call(3);

        // Quiet until t=159: nothing yet
        timers.advance(99);
        assert!(fired.borrow().is_empty());

        // t=160: exactly one invocation, with the last arguments
        timers.advance(1);
        assert_eq!(*fired.borrow(), vec![3]);

        // No stragglers
        timers.advance(500);
        assert_eq!(*fired.borrow(), vec![3]);
    }

    #[test]
    fn test_single_call_fires_after_wait() {
        let timers = FakeTimers::default();
        let count = Rc::new(Cell::new(0));

        let sink = count.clone();
        let debounced = Debouncer::new(timers.clone(), Duration::from_millis(50), move |()| {
            sink.set(sink.get() + 1);
        });

        debounced.call(());
        timers.advance(49);
        assert_eq!(count.get(), 0);
        timers.advance(1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_call_after_fire_schedules_again() {
        let timers = FakeTimers::default();
        let count = Rc::new(Cell::new(0));

        let sink = count.clone();
        let debounced = Debouncer::new(timers.clone(), Duration::from_millis(10), move |()| {
            sink.set(sink.get() + 1);
        });

        debounced.call(());
        timers.advance(10);
        debounced.call(());
        timers.advance(10);
        assert_eq!(count.get(), 2);
    }
}
