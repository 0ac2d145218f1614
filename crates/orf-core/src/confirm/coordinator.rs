//! Single-slot state machine for deferred navigations.

/// Action that completes a deferred navigation when invoked.
pub type ResumeAction = Box<dyn FnOnce()>;

/// A navigation suspended awaiting an explicit user decision.
pub struct PendingNavigation {
    url: String,
    resume: ResumeAction,
}

impl PendingNavigation {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Holds at most one pending navigation until a confirm/cancel event.
///
/// There is no timeout: a pending navigation is held indefinitely until a
/// discrete confirm or cancel arrives. Cancellation is always explicit.
#[derive(Default)]
pub struct ConfirmationCoordinator {
    pending: Option<PendingNavigation>,
}

impl ConfirmationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defer a navigation until the user decides.
    ///
    /// An already-pending navigation is cancelled first: its resume action
    /// is dropped without running, and the replacement is logged.
    pub fn request(&mut self, url: impl Into<String>, resume: ResumeAction) {
        let url = url.into();
        if let Some(prev) = self.pending.take() {
            tracing::warn!(
                "pending navigation to {} cancelled by new request for {}",
                prev.url,
                url
            );
        }
        self.pending = Some(PendingNavigation { url, resume });
    }

    /// Complete the pending navigation; runs its resume action exactly
    /// once. No-op when idle.
    pub fn confirm(&mut self) {
        if let Some(pending) = self.pending.take() {
            (pending.resume)();
        }
    }

    /// Abandon the pending navigation; the resume action is dropped without
    /// running. No-op when idle.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_url(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.url())
    }
}
