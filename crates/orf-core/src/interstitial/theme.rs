//! Visual theme for the confirmation artifact.

use serde::{Deserialize, Serialize};

/// Colors, typography and spacing for the structured interstitial.
///
/// Every field has a documented default; a config file only needs to name
/// the fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterstitialTheme {
    /// Accent color for the displayed URL and popup confirm button.
    pub primary_color: String,
    /// Cancel button and footer color.
    pub secondary_color: String,
    /// Full-page confirm button color.
    pub success_color: String,
    /// Warning block background.
    pub warning_color: String,
    pub danger_color: String,
    pub background_color: String,
    /// Card/dialog surface.
    pub surface_color: String,
    pub text_color: String,
    pub border_color: String,
    pub font_family: String,
    pub font_size: String,
    pub heading_font_size: String,
    pub padding: String,
    pub border_radius: String,
    pub spacing: String,
    pub box_shadow: String,
}

impl Default for InterstitialTheme {
    fn default() -> Self {
        Self {
            primary_color: "#007bff".to_string(),
            secondary_color: "#6c757d".to_string(),
            success_color: "#28a745".to_string(),
            warning_color: "#ffc107".to_string(),
            danger_color: "#dc3545".to_string(),
            background_color: "#f8f9fa".to_string(),
            surface_color: "#ffffff".to_string(),
            text_color: "#212529".to_string(),
            border_color: "#dee2e6".to_string(),
            font_family: "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \
                          \"Helvetica Neue\", Arial, sans-serif"
                .to_string(),
            font_size: "16px".to_string(),
            heading_font_size: "24px".to_string(),
            padding: "20px".to_string(),
            border_radius: "8px".to_string(),
            spacing: "16px".to_string(),
            box_shadow: "0 4px 6px rgba(0,0,0,0.1)".to_string(),
        }
    }
}
