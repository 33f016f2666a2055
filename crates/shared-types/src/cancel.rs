use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Liveness flag for a deferred result.
///
/// A component hands a clone to each async flow it starts and cancels the
/// token when it unmounts; the flow checks it before applying its result.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// `Some(value)` while the token is live, `None` once cancelled.
    pub fn deliver<T>(&self, value: T) -> Option<T> {
        if self.is_cancelled() {
            None
        } else {
            Some(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_token_delivers() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert_eq!(token.deliver(7), Some(7));
    }

    #[test]
    fn cancel_is_shared_between_clones() {
        let token = CancelToken::new();
        let flow = token.clone();
        token.cancel();
        assert!(flow.is_cancelled());
        assert_eq!(flow.deliver("late result"), None);
    }
}
