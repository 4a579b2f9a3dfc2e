use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

/// Polled by workers between rows.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// One-way flag shared between workers. Once raised it stays raised.
#[derive(Debug, Default)]
pub struct CancelFlag(AtomicBool);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }
}

impl CancelToken for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn poll_all(token: &impl CancelToken, polls: usize) -> usize {
        (0..polls).take_while(|_| !token.is_cancelled()).count()
    }

    #[test]
    fn test_never_cancel_survives_every_poll() {
        assert_eq!(poll_all(&NeverCancel, 50), 50);
    }

    #[test]
    fn test_closure_can_cancel_after_budget() {
        let polls = AtomicUsize::new(0);
        let token = || polls.fetch_add(1, Ordering::Relaxed) >= 3;

        assert_eq!(poll_all(&token, 10), 3);
    }

    #[test]
    fn test_cancel_flag_is_visible_across_threads() {
        let flag = CancelFlag::new();
        assert!(!flag.is_cancelled());

        std::thread::scope(|scope| {
            scope.spawn(|| flag.cancel());
        });

        assert!(flag.is_cancelled());
        flag.cancel();
        assert_eq!(poll_all(&flag, 5), 0);
    }

    #[test]
    fn test_cancelled_message() {
        assert_eq!(Cancelled.to_string(), "operation cancelled");
    }
}
