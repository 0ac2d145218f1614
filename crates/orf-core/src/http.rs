//! HTTP boundary: translates redirect decisions into protocol actions.
//!
//! Framework-agnostic by design. A server adapter extracts the candidate
//! URL from its request (query parameter or header), calls
//! [`HttpRedirectGate::plan`], and maps the returned [`HttpAction`] onto
//! its own response type. The gate never performs I/O itself.

use serde::Serialize;

use crate::firewall::{PolicyConfig, RedirectFirewall};

pub const DEFAULT_REDIRECT_PARAM: &str = "redirect";
pub const DEFAULT_REDIRECT_HEADER: &str = "x-redirect-url";

/// Options for the HTTP redirect gate.
#[derive(Debug, Clone)]
pub struct HttpGateOptions {
    /// Query parameter carrying the candidate URL.
    pub redirect_param: String,
    /// Header consulted when the parameter is absent.
    pub redirect_header: String,
    /// Send blocked requests here instead of an error response.
    pub fallback_url: Option<String>,
    /// Status for the structured block response.
    pub block_status: u16,
    /// Status for allowed redirects.
    pub redirect_status: u16,
    /// Extra headers attached to allowed redirects.
    pub extra_headers: Vec<(String, String)>,
    /// Hand allowed URLs to an interstitial step instead of redirecting.
    pub interstitial: bool,
}

impl Default for HttpGateOptions {
    fn default() -> Self {
        Self {
            redirect_param: DEFAULT_REDIRECT_PARAM.to_string(),
            redirect_header: DEFAULT_REDIRECT_HEADER.to_string(),
            fallback_url: None,
            block_status: 400,
            redirect_status: 302,
            extra_headers: Vec::new(),
            interstitial: false,
        }
    }
}

/// Structured body for blocked requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub message: String,
}

impl BlockBody {
    fn new(reason: Option<String>) -> Self {
        Self {
            error: "Invalid redirect URL".to_string(),
            reason,
            message: "The requested redirect URL is not allowed by security policy"
                .to_string(),
        }
    }
}

/// Protocol-level action the server adapter should take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpAction {
    /// No candidate URL in the request; continue it untouched.
    PassThrough,
    Redirect {
        status: u16,
        location: String,
        headers: Vec<(String, String)>,
    },
    Block {
        status: u16,
        body: BlockBody,
    },
    /// Allowed, but the configured interstitial step takes over the
    /// response.
    Interstitial {
        url: String,
    },
}

/// Outcome of the validation-only screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOutcome {
    /// Allowed; `final_url` is the sanitized form when strict mode
    /// produced one, the original URL otherwise.
    Cleared { final_url: String },
    Rejected { status: u16, body: BlockBody },
}

/// Gate guarding an HTTP redirect endpoint.
#[derive(Debug)]
pub struct HttpRedirectGate {
    firewall: RedirectFirewall,
    options: HttpGateOptions,
}

impl HttpRedirectGate {
    pub fn new(policy: PolicyConfig, options: HttpGateOptions) -> Self {
        Self {
            firewall: RedirectFirewall::new(policy),
            options,
        }
    }

    /// Plan the response for a request.
    ///
    /// `query_value` and `header_value` are the request's values for
    /// [`HttpGateOptions::redirect_param`] and `redirect_header`; the
    /// parameter wins when both are present, and the absence of both is a
    /// pass-through.
    pub fn plan(&mut self, query_value: Option<&str>, header_value: Option<&str>) -> HttpAction {
        let Some(url) = query_value.or(header_value) else {
            return HttpAction::PassThrough;
        };

        let decision = self.firewall.validate_redirect(url);
        if !decision.allowed {
            if let Some(fallback) = &self.options.fallback_url {
                return HttpAction::Redirect {
                    status: 302,
                    location: fallback.clone(),
                    headers: Vec::new(),
                };
            }
            return HttpAction::Block {
                status: self.options.block_status,
                body: BlockBody::new(decision.reason),
            };
        }

        let final_url = decision
            .sanitized_url
            .unwrap_or_else(|| url.to_string());
        if self.options.interstitial {
            return HttpAction::Interstitial { url: final_url };
        }
        HttpAction::Redirect {
            status: self.options.redirect_status,
            location: final_url,
            headers: self.options.extra_headers.clone(),
        }
    }

    /// Validation-only screen: no redirect planning, just cleared/rejected
    /// plus the final URL to carry forward.
    pub fn screen(&mut self, url: &str) -> ScreenOutcome {
        let decision = self.firewall.validate_redirect(url);
        if decision.allowed {
            ScreenOutcome::Cleared {
                final_url: decision
                    .sanitized_url
                    .unwrap_or_else(|| url.to_string()),
            }
        } else {
            ScreenOutcome::Rejected {
                status: 400,
                body: BlockBody::new(decision.reason),
            }
        }
    }

    pub fn firewall(&self) -> &RedirectFirewall {
        &self.firewall
    }

    pub fn firewall_mut(&mut self) -> &mut RedirectFirewall {
        &mut self.firewall
    }
}
