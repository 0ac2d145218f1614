//! Navigation interception.
//!
//! Observes three kinds of navigation intent from a hosting UI surface
//! (link activation, form submission, history mutation) and routes each
//! target URL through the policy firewall. The host integrates by calling
//! in explicitly and by implementing [`NavigationHost`], the capability
//! interface the interceptor performs effects through.

mod host;
mod interceptor;

pub use host::{NavigationHost, NoopHost};
pub use interceptor::{HistoryOutcome, InterceptConfig, InterceptOutcome, NavigationInterceptor};

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::Arc;

    use crate::firewall::PolicyConfig;

    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        events: RefCell<Vec<String>>,
    }

    impl RecordingHost {
        fn events(&self) -> Vec<String> {
            self.events.borrow().clone()
        }
    }

    impl NavigationHost for RecordingHost {
        fn assign_location(&self, url: &str) {
            self.events.borrow_mut().push(format!("assign {url}"));
        }
        fn submit_form(&self, action: &str) {
            self.events.borrow_mut().push(format!("submit {action}"));
        }
        fn push_history(&self, url: &str) {
            self.events.borrow_mut().push(format!("push {url}"));
        }
        fn history_back(&self) {
            self.events.borrow_mut().push("back".to_string());
        }
        fn notify(&self, message: &str) {
            self.events.borrow_mut().push(format!("notify {message}"));
        }
    }

    fn interceptor(
        config: InterceptConfig,
    ) -> (NavigationInterceptor<RecordingHost>, Arc<RecordingHost>) {
        let host = Arc::new(RecordingHost::default());
        let policy = PolicyConfig::for_domains(["example.com"]);
        (
            NavigationInterceptor::new(policy, config, Arc::clone(&host)),
            host,
        )
    }

    #[test]
    fn blocked_link_cancels_effect_and_notifies() {
        let (mut interceptor, host) = interceptor(InterceptConfig::default());
        let outcome = interceptor.on_link_activation("https://evil.com/x");
        assert_eq!(outcome, InterceptOutcome::Blocked);
        assert_eq!(
            host.events(),
            vec!["notify Redirect blocked: Domain evil.com not allowed".to_string()]
        );
        assert_eq!(interceptor.violations().len(), 1);
    }

    #[test]
    fn allowed_link_navigates_immediately() {
        let (mut interceptor, host) = interceptor(InterceptConfig::default());
        let outcome = interceptor.on_link_activation("https://example.com/x");
        assert_eq!(outcome, InterceptOutcome::Performed);
        assert_eq!(host.events(), vec!["assign https://example.com/x".to_string()]);
    }

    #[test]
    fn confirmation_defers_the_effect_until_confirm() {
        let (mut interceptor, host) = interceptor(InterceptConfig {
            require_confirmation: true,
            ..Default::default()
        });
        let outcome = interceptor.on_link_activation("https://example.com/x");
        assert_eq!(outcome, InterceptOutcome::Deferred);
        assert_eq!(interceptor.pending_url(), Some("https://example.com/x"));
        assert!(host.events().is_empty());

        interceptor.confirm_pending();
        assert_eq!(host.events(), vec!["assign https://example.com/x".to_string()]);
        assert_eq!(interceptor.pending_url(), None);
    }

    #[test]
    fn cancel_abandons_the_deferred_effect() {
        let (mut interceptor, host) = interceptor(InterceptConfig {
            require_confirmation: true,
            ..Default::default()
        });
        interceptor.on_link_activation("https://example.com/x");
        interceptor.cancel_pending();
        assert!(host.events().is_empty());
        assert_eq!(interceptor.pending_url(), None);
    }

    #[test]
    fn form_submission_resumes_through_submit() {
        let (mut interceptor, host) = interceptor(InterceptConfig {
            require_confirmation: true,
            ..Default::default()
        });
        let outcome = interceptor.on_form_submission("https://example.com/submit");
        assert_eq!(outcome, InterceptOutcome::Deferred);
        interceptor.confirm_pending();
        assert_eq!(
            host.events(),
            vec!["submit https://example.com/submit".to_string()]
        );
    }

    #[test]
    fn trust_all_defers_even_non_whitelisted_urls() {
        let (mut interceptor, host) = interceptor(InterceptConfig {
            trust_all: true,
            require_confirmation: true,
            ..Default::default()
        });
        let outcome = interceptor.on_link_activation("https://evil.com/x");
        assert_eq!(outcome, InterceptOutcome::Deferred);
        interceptor.confirm_pending();
        assert_eq!(host.events(), vec!["assign https://evil.com/x".to_string()]);
    }

    #[test]
    fn history_mutation_supports_allow_block_only() {
        let (mut interceptor, host) = interceptor(InterceptConfig {
            require_confirmation: true,
            ..Default::default()
        });
        // Allowed even though confirmation is configured: the mutation has
        // already taken effect, so there is nothing to defer.
        let outcome = interceptor.on_history_mutation("https://example.com/page");
        assert_eq!(outcome, HistoryOutcome::Allowed);
        assert_eq!(interceptor.pending_url(), None);

        let outcome = interceptor.on_history_mutation("https://evil.com/page");
        assert_eq!(outcome, HistoryOutcome::Blocked);
        assert_eq!(
            host.events(),
            vec!["notify Redirect blocked: Domain evil.com not allowed".to_string()]
        );
    }

    #[test]
    fn disabled_interceptor_passes_everything_through() {
        let (mut interceptor, host) = interceptor(InterceptConfig::default());
        interceptor.disable();
        assert_eq!(
            interceptor.on_link_activation("https://evil.com"),
            InterceptOutcome::PassedThrough
        );
        assert_eq!(
            interceptor.on_history_mutation("https://evil.com"),
            HistoryOutcome::PassedThrough
        );
        assert!(host.events().is_empty());
        assert!(interceptor.violations().is_empty());

        interceptor.enable();
        assert_eq!(
            interceptor.on_link_activation("https://evil.com"),
            InterceptOutcome::Blocked
        );
    }
}
