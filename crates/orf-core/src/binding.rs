//! UI binding: guarded navigation helpers over an observable decision.
//!
//! The reactive-surface analog of the HTTP gate. A view layer wraps one
//! [`FirewallBinding`], calls the guarded helpers from its event handlers,
//! and reads [`FirewallBinding::last_decision`] as observable state. The
//! unload/back hooks let a surface veto its default action when
//! auto-validation is on.

use std::sync::Arc;

use crate::firewall::{Decision, PolicyConfig, RedirectFirewall};
use crate::intercept::NavigationHost;

/// Callback invoked with every blocking decision.
pub type ViolationCallback = Box<dyn Fn(&Decision)>;

/// Options for [`FirewallBinding`].
pub struct BindingOptions {
    pub policy: PolicyConfig,
    /// Re-validate the current location in the unload/back hooks.
    pub auto_validate: bool,
    pub on_violation: Option<ViolationCallback>,
}

impl BindingOptions {
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            policy,
            auto_validate: false,
            on_violation: None,
        }
    }
}

/// Binds a firewall to a UI surface through its [`NavigationHost`].
pub struct FirewallBinding<H: NavigationHost> {
    firewall: RedirectFirewall,
    host: Arc<H>,
    auto_validate: bool,
    on_violation: Option<ViolationCallback>,
    last_decision: Option<Decision>,
}

impl<H: NavigationHost> FirewallBinding<H> {
    pub fn new(options: BindingOptions, host: Arc<H>) -> Self {
        Self {
            firewall: RedirectFirewall::new(options.policy),
            host,
            auto_validate: options.auto_validate,
            on_violation: options.on_violation,
            last_decision: None,
        }
    }

    /// Validate `url`, record the outcome as the observable last decision,
    /// and fire the violation callback on a block.
    pub fn validate_redirect(&mut self, url: &str) -> Decision {
        let decision = self.firewall.validate_redirect(url);
        if !decision.allowed {
            if let Some(callback) = &self.on_violation {
                callback(&decision);
            }
        }
        self.last_decision = Some(decision.clone());
        decision
    }

    /// Navigate on allow (sanitized form preferred), else go to `fallback`
    /// or report the block.
    pub fn safe_redirect(&mut self, url: &str, fallback: Option<&str>) {
        let decision = self.validate_redirect(url);
        if decision.allowed {
            let target = decision.sanitized_url.as_deref().unwrap_or(url);
            self.host.assign_location(target);
        } else if let Some(fallback) = fallback {
            self.host.assign_location(fallback);
        } else {
            tracing::error!(
                "redirect blocked: {}",
                decision.reason.as_deref().unwrap_or("unknown reason")
            );
        }
    }

    /// In-app analog of [`FirewallBinding::safe_redirect`]: pushes a
    /// history entry instead of assigning the location.
    pub fn safe_navigate(&mut self, url: &str, fallback: Option<&str>) {
        let decision = self.validate_redirect(url);
        if decision.allowed {
            let target = decision.sanitized_url.as_deref().unwrap_or(url);
            self.host.push_history(target);
        } else if let Some(fallback) = fallback {
            self.host.push_history(fallback);
        } else {
            tracing::error!(
                "navigation blocked: {}",
                decision.reason.as_deref().unwrap_or("unknown reason")
            );
        }
    }

    /// The decision produced by the most recent validation, if any.
    pub fn last_decision(&self) -> Option<&Decision> {
        self.last_decision.as_ref()
    }

    /// Unload hook. Returns true when the surface must veto its default
    /// action. Inactive unless auto-validation is on.
    pub fn on_before_unload(&mut self, current_url: &str) -> bool {
        if !self.auto_validate {
            return false;
        }
        !self.validate_redirect(current_url).allowed
    }

    /// Back-navigation hook. On a blocked location the host is stepped
    /// back one history entry and the violation callback has fired.
    /// Returns true when vetoed. Inactive unless auto-validation is on.
    pub fn on_back_navigation(&mut self, current_url: &str) -> bool {
        if !self.auto_validate {
            return false;
        }
        if self.validate_redirect(current_url).allowed {
            return false;
        }
        self.host.history_back();
        true
    }
}
