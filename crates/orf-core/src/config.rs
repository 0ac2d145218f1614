use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::firewall::PolicyConfig;
use crate::http::{HttpGateOptions, DEFAULT_REDIRECT_HEADER, DEFAULT_REDIRECT_PARAM};
use crate::interstitial::InterstitialConfig;

/// HTTP gate parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Query parameter carrying the candidate URL.
    pub redirect_param: String,
    /// Header consulted when the parameter is absent.
    pub redirect_header: String,
    /// Where blocked requests are sent instead of an error response.
    pub fallback_url: Option<String>,
    /// Status for the structured block response.
    pub block_status: u16,
    /// Status for allowed redirects.
    pub redirect_status: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            redirect_param: DEFAULT_REDIRECT_PARAM.to_string(),
            redirect_header: DEFAULT_REDIRECT_HEADER.to_string(),
            fallback_url: None,
            block_status: 400,
            redirect_status: 302,
        }
    }
}

/// Global configuration loaded from `~/.config/orf/config.toml`.
///
/// Policy fields mirror [`PolicyConfig`] minus the custom validator, which
/// is code rather than configuration and is installed through
/// [`crate::firewall::PolicyPatch`] by the embedding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrfConfig {
    /// Destination domains the policy accepts.
    pub allowed_domains: Vec<String>,
    #[serde(default)]
    pub allow_subdomains: bool,
    #[serde(default)]
    pub allow_localhost: bool,
    #[serde(default = "default_true")]
    pub allow_relative_urls: bool,
    #[serde(default)]
    pub strict_mode: bool,
    #[serde(default = "default_true")]
    pub log_violations: bool,
    /// Optional HTTP gate overrides.
    #[serde(default)]
    pub http: Option<HttpConfig>,
    /// Optional interstitial theme/content overrides.
    #[serde(default)]
    pub interstitial: Option<InterstitialConfig>,
}

fn default_true() -> bool {
    true
}

impl Default for OrfConfig {
    fn default() -> Self {
        Self {
            allowed_domains: Vec::new(),
            allow_subdomains: false,
            allow_localhost: false,
            allow_relative_urls: true,
            strict_mode: false,
            log_violations: true,
            http: None,
            interstitial: None,
        }
    }
}

impl OrfConfig {
    /// Library policy derived from this file config.
    pub fn policy(&self) -> PolicyConfig {
        PolicyConfig {
            allowed_domains: self.allowed_domains.clone(),
            allow_subdomains: self.allow_subdomains,
            allow_localhost: self.allow_localhost,
            allow_relative_urls: self.allow_relative_urls,
            strict_mode: self.strict_mode,
            log_violations: self.log_violations,
            custom_validator: None,
        }
    }

    /// HTTP gate options derived from the optional `[http]` section,
    /// defaults where the section is absent.
    pub fn gate_options(&self) -> HttpGateOptions {
        let http = self.http.clone().unwrap_or_default();
        HttpGateOptions {
            redirect_param: http.redirect_param,
            redirect_header: http.redirect_header,
            fallback_url: http.fallback_url,
            block_status: http.block_status,
            redirect_status: http.redirect_status,
            ..Default::default()
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("orf")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OrfConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// As [`load_or_init`], for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<OrfConfig> {
    if !path.exists() {
        let default_cfg = OrfConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: OrfConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = OrfConfig::default();
        assert!(cfg.allowed_domains.is_empty());
        assert!(!cfg.allow_subdomains);
        assert!(!cfg.allow_localhost);
        assert!(cfg.allow_relative_urls);
        assert!(!cfg.strict_mode);
        assert!(cfg.log_violations);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = OrfConfig {
            allowed_domains: vec!["example.com".to_string()],
            allow_subdomains: true,
            ..Default::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: OrfConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.allowed_domains, cfg.allowed_domains);
        assert!(parsed.allow_subdomains);
        assert!(parsed.allow_relative_urls);
    }

    #[test]
    fn config_toml_missing_keys_use_defaults() {
        let toml = r#"
            allowed_domains = ["example.com", "docs.example.com"]
        "#;
        let cfg: OrfConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.allowed_domains.len(), 2);
        assert!(!cfg.allow_subdomains);
        assert!(cfg.allow_relative_urls);
        assert!(cfg.log_violations);
        assert!(cfg.http.is_none());
    }

    #[test]
    fn config_toml_http_section() {
        let toml = r#"
            allowed_domains = ["example.com"]

            [http]
            redirect_param = "next"
            fallback_url = "https://example.com/home"
            redirect_status = 307
        "#;
        let cfg: OrfConfig = toml::from_str(toml).unwrap();
        let options = cfg.gate_options();
        assert_eq!(options.redirect_param, "next");
        assert_eq!(options.redirect_header, DEFAULT_REDIRECT_HEADER);
        assert_eq!(options.fallback_url.as_deref(), Some("https://example.com/home"));
        assert_eq!(options.block_status, 400);
        assert_eq!(options.redirect_status, 307);
    }

    #[test]
    fn config_toml_interstitial_section() {
        let toml = r#"
            allowed_domains = ["example.com"]

            [interstitial]
            mode = "fullpage"

            [interstitial.content]
            title = "Leaving the app"
        "#;
        let cfg: OrfConfig = toml::from_str(toml).unwrap();
        let interstitial = cfg.interstitial.unwrap();
        assert_eq!(
            interstitial.mode,
            crate::interstitial::InterstitialMode::FullPage
        );
        assert_eq!(interstitial.content.title, "Leaving the app");
        // Unmentioned fields keep their defaults.
        assert_eq!(interstitial.content.confirm_button_text, "Continue to External Site");
    }

    #[test]
    fn load_or_init_creates_a_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orf").join("config.toml");

        let cfg = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert!(cfg.allowed_domains.is_empty());

        // A second load reads the file it just wrote.
        let reloaded = load_or_init_at(&path).unwrap();
        assert!(reloaded.allowed_domains.is_empty());
        assert!(reloaded.allow_relative_urls);
    }
}
