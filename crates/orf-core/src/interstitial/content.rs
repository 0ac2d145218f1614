//! Text content for the confirmation artifact.

use serde::{Deserialize, Serialize};

/// User-facing copy for the structured interstitial, or a full custom
/// template that replaces the structured rendering entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterstitialContent {
    pub title: String,
    pub description: String,
    /// Label shown above the destination URL.
    pub url_display: String,
    pub warning_text: Option<String>,
    pub confirm_button_text: String,
    pub cancel_button_text: String,
    pub footer_text: Option<String>,
    /// Verbatim template used instead of the structured rendering. Exactly
    /// three placeholders are substituted: `{{URL}}`, `{{CONFIRM_ACTION}}`
    /// and `{{CANCEL_ACTION}}`.
    pub custom_template: Option<String>,
}

impl Default for InterstitialContent {
    fn default() -> Self {
        Self {
            title: "Security Check Required".to_string(),
            description: "For your security, please confirm that you want to visit \
                          this external website."
                .to_string(),
            url_display: "You are about to visit:".to_string(),
            warning_text: Some(
                "This external site is not controlled by us and may have different \
                 security policies."
                    .to_string(),
            ),
            confirm_button_text: "Continue to External Site".to_string(),
            cancel_button_text: "Stay on This Site".to_string(),
            footer_text: Some(
                "If you're unsure, it's safer to stay on this site.".to_string(),
            ),
            custom_template: None,
        }
    }
}
