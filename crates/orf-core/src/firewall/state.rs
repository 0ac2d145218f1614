//! The redirect validation pipeline and its owned policy state.

use crate::url_model::{self, ParsedUrl};

use super::{Decision, PolicyConfig, PolicyPatch, Violation, ViolationLog};

/// Validates destination URLs against an owned domain policy.
///
/// Evaluation is synchronous, never blocks, and is pure apart from the
/// violation-log side effect. Each call reads one consistent snapshot of
/// the policy; [`RedirectFirewall::update_config`] only affects subsequent
/// calls, never a decision already produced.
#[derive(Debug)]
pub struct RedirectFirewall {
    config: PolicyConfig,
    violations: ViolationLog,
}

impl RedirectFirewall {
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            config,
            violations: ViolationLog::new(),
        }
    }

    /// Firewall accepting exactly the given domains, default modifiers.
    pub fn for_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(PolicyConfig::for_domains(domains))
    }

    /// Classify `url` as allowed or blocked.
    ///
    /// Ordered pipeline; the first matching rule is terminal:
    /// empty input, custom validator, relative, localhost/private,
    /// missing host, domain whitelist. Only the whitelist-mismatch path
    /// appends to the violation log.
    pub fn validate_redirect(&mut self, url: &str) -> Decision {
        if url.is_empty() {
            return Decision::block("Invalid URL provided");
        }

        if let Some(validator) = &self.config.custom_validator {
            if !validator(url) {
                return Decision::block("Failed custom validation");
            }
        }

        let parts = match url_model::parse(url) {
            Ok(ParsedUrl::Relative) => {
                return if self.config.allow_relative_urls {
                    self.finish_allow(url)
                } else {
                    Decision::block("Relative URLs not allowed")
                };
            }
            Ok(ParsedUrl::Absolute(parts)) => parts,
            // Unparsable strings carry no extractable host; same outcome as
            // an absolute URL without one.
            Err(_) => return Decision::block("No domain found in URL"),
        };

        if let Some(host) = parts.host.as_deref() {
            if url_model::is_localhost_or_private(host) {
                return if self.config.allow_localhost {
                    self.finish_allow(url)
                } else {
                    Decision::block("Localhost not allowed")
                };
            }
        }

        let Some(host) = parts.host.as_deref() else {
            return Decision::block("No domain found in URL");
        };

        if !self.domain_allowed(host) {
            self.log_violation(url, &format!("Domain {host} not in whitelist"));
            return Decision::block(format!("Domain {host} not allowed"));
        }

        self.finish_allow(url)
    }

    /// Ordered copy of the violation log; mutating it does not affect the
    /// firewall.
    pub fn violations(&self) -> Vec<Violation> {
        self.violations.list()
    }

    pub fn clear_violations(&mut self) {
        self.violations.clear();
    }

    /// Per-key replace into the owned policy. Takes effect for the next
    /// validation call onward.
    pub fn update_config(&mut self, patch: PolicyPatch) {
        self.config.apply(patch);
    }

    /// Copy of the configured whitelist; mutating it does not affect the
    /// firewall.
    pub fn allowed_domains(&self) -> Vec<String> {
        self.config.allowed_domains.clone()
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    fn domain_allowed(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.config.allowed_domains.iter().any(|entry| {
            let entry = entry.to_lowercase();
            host == entry
                || (self.config.allow_subdomains && host.ends_with(&format!(".{entry}")))
        })
    }

    fn finish_allow(&self, url: &str) -> Decision {
        if self.config.strict_mode {
            if let Some(sanitized) = url_model::sanitize_url(url) {
                return Decision::allow_sanitized(sanitized);
            }
        }
        Decision::allow()
    }

    fn log_violation(&mut self, original_url: &str, reason: &str) {
        if !self.config.log_violations {
            return;
        }
        tracing::warn!("redirect violation: {reason} - URL: {original_url}");
        self.violations.record(original_url, reason);
    }
}
