//! The referee's one concurrency primitive: run a closure with a
//! deadline, observing at most one of value/no-value and never
//! blocking past the deadline. Grounded in the same shape as the
//! corpus's own blocking-network-read-with-timeout code, generalized
//! from a socket read to an arbitrary agent call.
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Runs `work` on a detached thread and waits up to `timeout` for it to
/// finish. Returns `None` if `work` doesn't finish (or panics) within
/// the deadline.
///
/// If `work` finishes after the deadline, its result is simply dropped;
/// the caller has already moved on and must not be affected by it. This
/// is why `work` takes no reference to referee state: by the time it
/// would be unsafe to touch, the closure has already taken ownership of
/// everything it needs.
pub fn run_with_deadline<T, F>(timeout: Duration, work: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        // If `work` panics, the thread unwinds and `sender` is dropped
        // without ever sending - the receiver then sees a disconnect
        // rather than waiting out the full timeout.
        let result = work();
        let _ = sender.send(result);
    });

    receiver.recv_timeout(timeout).ok()
}
