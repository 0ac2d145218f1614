//! Confirmation artifact rendering.
//!
//! Produces the displayable string the hosting surface shows while a
//! navigation sits in the confirmation coordinator. Theme and content are
//! plain configuration with documented defaults; callers that want full
//! control supply a custom template instead. The accept/decline controls
//! are wired to host-supplied action strings passed per render call, so
//! there is no shared callback state here.

mod content;
mod render;
mod theme;

pub use content::InterstitialContent;
pub use render::render_interstitial;
pub use theme::InterstitialTheme;

use serde::{Deserialize, Serialize};

/// How the structured artifact is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterstitialMode {
    /// Overlay dialog on top of the current page.
    #[default]
    Popup,
    /// Full-screen takeover.
    FullPage,
}

/// Complete rendering configuration: layout mode + theme + content.
///
/// `mode` is declared before the table-valued fields so the TOML form
/// serializes cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterstitialConfig {
    pub mode: InterstitialMode,
    pub theme: InterstitialTheme,
    pub content: InterstitialContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_template_substitutes_exactly_three_placeholders() {
        let config = InterstitialConfig {
            content: InterstitialContent {
                custom_template: Some(
                    "<a onclick=\"{{CONFIRM_ACTION}}\">go to {{URL}}</a>\
                     <a onclick=\"{{CANCEL_ACTION}}\">stay</a>"
                        .to_string(),
                ),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_interstitial("https://example.com", "ok()", "no()", &config);
        assert_eq!(
            html,
            "<a onclick=\"ok()\">go to https://example.com</a><a onclick=\"no()\">stay</a>"
        );
    }

    #[test]
    fn popup_contains_url_and_both_actions_once() {
        let config = InterstitialConfig::default();
        let html = render_interstitial("https://example.com/x", "confirm()", "cancel()", &config);
        assert!(html.contains("orf-popup-overlay"));
        assert!(html.contains("https://example.com/x"));
        assert_eq!(html.matches("onclick=\"confirm()\"").count(), 1);
        assert_eq!(html.matches("onclick=\"cancel()\"").count(), 1);
        assert!(html.contains("Security Check Required"));
    }

    #[test]
    fn full_page_honors_warning_and_footer() {
        let mut config = InterstitialConfig {
            mode: InterstitialMode::FullPage,
            ..Default::default()
        };
        let html = render_interstitial("https://example.com", "c()", "x()", &config);
        assert!(html.contains("orf-fullpage-interstitial"));
        assert!(html.contains("orf-warning"));
        assert!(html.contains("orf-footer"));

        config.content.warning_text = None;
        config.content.footer_text = None;
        let html = render_interstitial("https://example.com", "c()", "x()", &config);
        assert!(!html.contains("orf-warning"));
        assert!(!html.contains("orf-footer"));
    }

    #[test]
    fn displayed_url_is_escaped() {
        let config = InterstitialConfig::default();
        let html = render_interstitial(
            "https://example.com/<script>\"x\"",
            "c()",
            "x()",
            &config,
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn mode_serializes_lowercase() {
        let toml = toml::to_string(&InterstitialConfig {
            mode: InterstitialMode::FullPage,
            ..Default::default()
        })
        .unwrap();
        assert!(toml.contains("mode = \"fullpage\""));
    }
}
