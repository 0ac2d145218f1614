//! Integration test: policy evaluation, violation log and the deferred
//! confirmation flow working together over one configuration.

use std::cell::RefCell;
use std::sync::Arc;

use orf_core::firewall::{PolicyConfig, RedirectFirewall};
use orf_core::intercept::{
    InterceptConfig, InterceptOutcome, NavigationHost, NavigationInterceptor,
};
use orf_core::interstitial::{render_interstitial, InterstitialConfig};

fn scenario_policy() -> PolicyConfig {
    PolicyConfig {
        allow_subdomains: true,
        ..PolicyConfig::for_domains(["example.com"])
    }
}

#[test]
fn validation_scenario_end_to_end() {
    let mut firewall = RedirectFirewall::new(scenario_policy());

    let d = firewall.validate_redirect("https://sub.example.com/x");
    assert!(d.allowed);
    assert_eq!(d.reason, None);

    let d = firewall.validate_redirect("http://localhost:3000");
    assert!(!d.allowed);
    assert_eq!(d.reason.as_deref(), Some("Localhost not allowed"));

    let d = firewall.validate_redirect("https://evil.com");
    assert!(!d.allowed);
    assert_eq!(d.reason.as_deref(), Some("Domain evil.com not allowed"));

    let violations = firewall.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].original_url, "https://evil.com");
}

#[derive(Default)]
struct PageSurface {
    location: RefCell<Option<String>>,
    notices: RefCell<Vec<String>>,
}

impl NavigationHost for PageSurface {
    fn assign_location(&self, url: &str) {
        *self.location.borrow_mut() = Some(url.to_string());
    }
    fn submit_form(&self, _action: &str) {}
    fn push_history(&self, _url: &str) {}
    fn history_back(&self) {}
    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

#[test]
fn intercepted_link_flows_through_confirmation() {
    let host = Arc::new(PageSurface::default());
    let mut interceptor = NavigationInterceptor::new(
        scenario_policy(),
        InterceptConfig {
            require_confirmation: true,
            ..Default::default()
        },
        Arc::clone(&host),
    );

    // Blocked destination: native effect cancelled, user notified, nothing
    // pending.
    let outcome = interceptor.on_link_activation("https://evil.com/offer");
    assert_eq!(outcome, InterceptOutcome::Blocked);
    assert_eq!(interceptor.pending_url(), None);
    assert_eq!(host.notices.borrow().len(), 1);

    // Allowed destination: deferred, the artifact can be rendered for the
    // pending URL, and confirm completes the navigation.
    let outcome = interceptor.on_link_activation("https://sub.example.com/next");
    assert_eq!(outcome, InterceptOutcome::Deferred);
    let pending = interceptor.pending_url().unwrap().to_string();
    assert_eq!(pending, "https://sub.example.com/next");

    let artifact = render_interstitial(
        &pending,
        "orf.confirm()",
        "orf.cancel()",
        &InterstitialConfig::default(),
    );
    assert!(artifact.contains(&pending));

    interceptor.confirm_pending();
    assert_eq!(
        host.location.borrow().as_deref(),
        Some("https://sub.example.com/next")
    );
    assert_eq!(interceptor.pending_url(), None);

    // The blocked attempt is the only recorded violation.
    let violations = interceptor.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].original_url, "https://evil.com/offer");
}
