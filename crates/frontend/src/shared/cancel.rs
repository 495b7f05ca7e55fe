//! Cancellation flag tied to a view's lifetime
//!
//! A view creates one token, hands clones to its async tasks and cancels
//! it from `on_cleanup`. Tasks check the token before touching signals.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Token cancelled when the current reactive owner is disposed
pub fn use_cancel_token() -> CancelToken {
    let token = CancelToken::new();
    let on_drop = token.clone();
    leptos::prelude::on_cleanup(move || on_drop.cancel());
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let task = token.clone();
        assert!(!task.is_cancelled());
        token.cancel();
        assert!(task.is_cancelled());
        // idempotent
        token.cancel();
        assert!(token.is_cancelled());
    }
}
