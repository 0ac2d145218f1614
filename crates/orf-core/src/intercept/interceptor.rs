//! Routing of observed navigation intents through the firewall.

use std::sync::Arc;

use crate::confirm::{ConfirmationCoordinator, ResumeAction};
use crate::firewall::{Decision, PolicyConfig, PolicyPatch, RedirectFirewall, Violation};

use super::NavigationHost;

/// Behavior switches for the interceptor. Rendering concerns (what the
/// confirmation step looks like) live in [`crate::interstitial`].
#[derive(Debug, Clone)]
pub struct InterceptConfig {
    /// Master switch; a disabled interceptor passes every intent through.
    pub enabled: bool,
    /// Treat every destination as allowed, while still routing it through
    /// the confirmation step when one is configured.
    pub trust_all: bool,
    /// Defer allowed navigations until an explicit user confirmation.
    pub require_confirmation: bool,
    /// Report blocked attempts through [`NavigationHost::notify`].
    pub notify_on_block: bool,
    /// Log blocked attempts through `tracing`.
    pub log_blocked: bool,
}

impl Default for InterceptConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            trust_all: false,
            require_confirmation: false,
            notify_on_block: true,
            log_blocked: true,
        }
    }
}

/// What the interceptor did with an observed navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptOutcome {
    /// The navigation effect was performed immediately.
    Performed,
    /// The effect was suspended into the confirmation coordinator.
    Deferred,
    /// The native effect must be cancelled; nothing was performed.
    Blocked,
    /// Interception is disabled; the host lets the native effect run.
    PassedThrough,
}

/// Outcome for history mutations, which support allow/block only: the
/// mutation has typically already taken effect when observed, so there is
/// nothing left to defer behind a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOutcome {
    Allowed,
    Blocked,
    PassedThrough,
}

/// Observes navigation intents from a hosting surface and routes each
/// target URL through an owned [`RedirectFirewall`].
///
/// The host calls in explicitly for every intent it observes; nothing is
/// patched or overridden behind its back.
pub struct NavigationInterceptor<H: NavigationHost> {
    firewall: RedirectFirewall,
    coordinator: ConfirmationCoordinator,
    host: Arc<H>,
    config: InterceptConfig,
}

impl<H: NavigationHost + 'static> NavigationInterceptor<H> {
    pub fn new(policy: PolicyConfig, config: InterceptConfig, host: Arc<H>) -> Self {
        Self {
            firewall: RedirectFirewall::new(policy),
            coordinator: ConfirmationCoordinator::new(),
            host,
            config,
        }
    }

    /// A link is being followed to `href`.
    pub fn on_link_activation(&mut self, href: &str) -> InterceptOutcome {
        let resume = self.assign_resume(href);
        self.route(href, resume)
    }

    /// A form is being submitted to `action`.
    pub fn on_form_submission(&mut self, action: &str) -> InterceptOutcome {
        let host = Arc::clone(&self.host);
        let action_owned = action.to_string();
        self.route(action, Box::new(move || host.submit_form(&action_owned)))
    }

    /// A history entry is being pushed or replaced with `url`.
    pub fn on_history_mutation(&mut self, url: &str) -> HistoryOutcome {
        if !self.config.enabled {
            return HistoryOutcome::PassedThrough;
        }
        let decision = self.firewall.validate_redirect(url);
        if !decision.allowed && !self.config.trust_all {
            self.report_block(url, &decision);
            return HistoryOutcome::Blocked;
        }
        HistoryOutcome::Allowed
    }

    /// Programmatic navigation request; same policy path as a link.
    pub fn safe_redirect(&mut self, url: &str) -> InterceptOutcome {
        let resume = self.assign_resume(url);
        self.route(url, resume)
    }

    /// Complete the currently pending navigation, if any.
    pub fn confirm_pending(&mut self) {
        self.coordinator.confirm();
    }

    /// Abandon the currently pending navigation, if any.
    pub fn cancel_pending(&mut self) {
        self.coordinator.cancel();
    }

    pub fn pending_url(&self) -> Option<&str> {
        self.coordinator.pending_url()
    }

    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Validate without performing any effect.
    pub fn validate_url(&mut self, url: &str) -> Decision {
        self.firewall.validate_redirect(url)
    }

    pub fn violations(&self) -> Vec<Violation> {
        self.firewall.violations()
    }

    pub fn update_policy(&mut self, patch: PolicyPatch) {
        self.firewall.update_config(patch);
    }

    pub fn update_config(&mut self, config: InterceptConfig) {
        self.config = config;
    }

    fn assign_resume(&self, url: &str) -> ResumeAction {
        let host = Arc::clone(&self.host);
        let url = url.to_string();
        Box::new(move || host.assign_location(&url))
    }

    fn route(&mut self, url: &str, resume: ResumeAction) -> InterceptOutcome {
        if !self.config.enabled {
            return InterceptOutcome::PassedThrough;
        }
        let decision = self.firewall.validate_redirect(url);
        if !decision.allowed && !self.config.trust_all {
            self.report_block(url, &decision);
            return InterceptOutcome::Blocked;
        }
        if self.config.require_confirmation {
            self.coordinator.request(url, resume);
            InterceptOutcome::Deferred
        } else {
            resume();
            InterceptOutcome::Performed
        }
    }

    fn report_block(&self, url: &str, decision: &Decision) {
        let reason = decision.reason.as_deref().unwrap_or("policy violation");
        if self.config.log_blocked {
            tracing::warn!("navigation blocked: {reason} - URL: {url}");
        }
        if self.config.notify_on_block {
            self.host.notify(&format!("Redirect blocked: {reason}"));
        }
    }
}
