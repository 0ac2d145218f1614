//! Domain policy configuration owned by a firewall instance.

use std::fmt;
use std::sync::Arc;

/// Predicate over the raw URL string, consulted before classification.
///
/// Returning false blocks the URL outright; returning true only permits
/// falling through to the rest of the pipeline.
pub type CustomValidator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Policy governing acceptable redirect destinations.
#[derive(Clone)]
pub struct PolicyConfig {
    /// Destination domains accepted by the whitelist stage. Compared
    /// case-insensitively.
    pub allowed_domains: Vec<String>,
    /// Accept `sub.example.com` when `example.com` is whitelisted.
    pub allow_subdomains: bool,
    /// Accept localhost and private-network destinations.
    pub allow_localhost: bool,
    /// Accept scheme-less destinations (paths within the application).
    pub allow_relative_urls: bool,
    /// Attach the canonical sanitized form to allowed absolute URLs.
    pub strict_mode: bool,
    /// Record whitelist-mismatch rejections in the violation log.
    pub log_violations: bool,
    pub custom_validator: Option<CustomValidator>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            allowed_domains: Vec::new(),
            allow_subdomains: false,
            allow_localhost: false,
            allow_relative_urls: true,
            strict_mode: false,
            log_violations: true,
            custom_validator: None,
        }
    }
}

impl fmt::Debug for PolicyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyConfig")
            .field("allowed_domains", &self.allowed_domains)
            .field("allow_subdomains", &self.allow_subdomains)
            .field("allow_localhost", &self.allow_localhost)
            .field("allow_relative_urls", &self.allow_relative_urls)
            .field("strict_mode", &self.strict_mode)
            .field("log_violations", &self.log_violations)
            .field("custom_validator", &self.custom_validator.is_some())
            .finish()
    }
}

impl PolicyConfig {
    /// Policy accepting exactly the given domains, with default modifiers.
    pub fn for_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_domains: domains.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Apply a per-key update: `Some` fields replace the current value,
    /// `None` fields keep it.
    pub fn apply(&mut self, patch: PolicyPatch) {
        if let Some(v) = patch.allowed_domains {
            self.allowed_domains = v;
        }
        if let Some(v) = patch.allow_subdomains {
            self.allow_subdomains = v;
        }
        if let Some(v) = patch.allow_localhost {
            self.allow_localhost = v;
        }
        if let Some(v) = patch.allow_relative_urls {
            self.allow_relative_urls = v;
        }
        if let Some(v) = patch.strict_mode {
            self.strict_mode = v;
        }
        if let Some(v) = patch.log_violations {
            self.log_violations = v;
        }
        if let Some(v) = patch.custom_validator {
            self.custom_validator = Some(v);
        }
    }
}

/// Per-key update for an owned [`PolicyConfig`].
#[derive(Clone, Default)]
pub struct PolicyPatch {
    pub allowed_domains: Option<Vec<String>>,
    pub allow_subdomains: Option<bool>,
    pub allow_localhost: Option<bool>,
    pub allow_relative_urls: Option<bool>,
    pub strict_mode: Option<bool>,
    pub log_violations: Option<bool>,
    pub custom_validator: Option<CustomValidator>,
}
