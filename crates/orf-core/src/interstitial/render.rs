//! Renders the confirmation artifact to a displayable string.

use super::{InterstitialConfig, InterstitialContent, InterstitialMode, InterstitialTheme};

/// Produce the confirmation artifact for `url`.
///
/// `confirm_action` and `cancel_action` are the host-supplied action
/// strings wired to the accept/decline controls; each appears exactly once
/// so a user interaction invokes exactly one of them. A configured custom
/// template short-circuits the structured rendering.
pub fn render_interstitial(
    url: &str,
    confirm_action: &str,
    cancel_action: &str,
    config: &InterstitialConfig,
) -> String {
    if let Some(template) = &config.content.custom_template {
        return render_custom(template, url, confirm_action, cancel_action);
    }
    match config.mode {
        InterstitialMode::Popup => {
            render_popup(url, confirm_action, cancel_action, &config.theme, &config.content)
        }
        InterstitialMode::FullPage => {
            render_full_page(url, confirm_action, cancel_action, &config.theme, &config.content)
        }
    }
}

fn render_custom(template: &str, url: &str, confirm_action: &str, cancel_action: &str) -> String {
    template
        .replace("{{URL}}", url)
        .replace("{{CONFIRM_ACTION}}", confirm_action)
        .replace("{{CANCEL_ACTION}}", cancel_action)
}

/// Minimal escaping for text interpolated into the structured markup. The
/// destination URL is caller-supplied and must not break out of the
/// artifact.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_popup(
    url: &str,
    confirm_action: &str,
    cancel_action: &str,
    theme: &InterstitialTheme,
    content: &InterstitialContent,
) -> String {
    let base = base_styles(theme);
    format!(
        "<div class=\"orf-popup-overlay\" style=\"position: fixed; top: 0; left: 0; \
         width: 100%; height: 100%; background: rgba(0, 0, 0, 0.8); display: flex; \
         justify-content: center; align-items: center; z-index: 1000; {base}\">\n\
         <div class=\"orf-popup-content\" style=\"background: {surface}; padding: {padding}; \
         border-radius: {radius}; max-width: 500px; text-align: center; \
         box-shadow: {shadow}; border: 1px solid {border}\">\n\
         <h2 style=\"font-size: {heading_size}; margin: 0 0 {spacing} 0\">\u{26a0}\u{fe0f} {title}</h2>\n\
         <p style=\"margin: {spacing} 0; line-height: 1.6\">{description}</p>\n\
         {url_block}\n\
         <p style=\"margin: {spacing} 0; line-height: 1.6\">Are you sure you want to continue?</p>\n\
         {buttons}\n\
         </div>\n\
         </div>",
        base = base,
        surface = theme.surface_color,
        padding = theme.padding,
        radius = theme.border_radius,
        shadow = theme.box_shadow,
        border = theme.border_color,
        heading_size = theme.heading_font_size,
        spacing = theme.spacing,
        title = escape_html(&content.title),
        description = escape_html(&content.description),
        url_block = url_block(url, theme, content),
        buttons = buttons(
            confirm_action,
            cancel_action,
            &theme.primary_color,
            theme,
            content
        ),
    )
}

fn render_full_page(
    url: &str,
    confirm_action: &str,
    cancel_action: &str,
    theme: &InterstitialTheme,
    content: &InterstitialContent,
) -> String {
    let base = base_styles(theme);
    let warning = match &content.warning_text {
        Some(text) => format!(
            "<div class=\"orf-warning\" style=\"background: {warning_color}; color: #856404; \
             padding: {spacing}; border-radius: {radius}; margin: {spacing} 0\">\
             <strong>Important:</strong> {text}</div>\n",
            warning_color = theme.warning_color,
            spacing = theme.spacing,
            radius = theme.border_radius,
            text = escape_html(text),
        ),
        None => String::new(),
    };
    let footer = match &content.footer_text {
        Some(text) => format!(
            "<div class=\"orf-footer\" style=\"margin-top: {spacing}; font-size: 14px; \
             color: {secondary}\"><p>{text}</p></div>\n",
            spacing = theme.spacing,
            secondary = theme.secondary_color,
            text = escape_html(text),
        ),
        None => String::new(),
    };
    format!(
        "<div class=\"orf-fullpage-interstitial\" style=\"position: fixed; top: 0; left: 0; \
         width: 100%; height: 100%; background: {background}; z-index: 1000; display: flex; \
         justify-content: center; align-items: center; {base}\">\n\
         <div class=\"orf-content\" style=\"background: {surface}; padding: {padding}; \
         border-radius: {radius}; box-shadow: {shadow}; max-width: 600px; \
         text-align: center; border: 1px solid {border}\">\n\
         <h1 style=\"font-size: {heading_size}; margin: 0 0 {spacing} 0\">\u{26a0}\u{fe0f} {title}</h1>\n\
         {warning}\
         <p style=\"margin: {spacing} 0; line-height: 1.6\">{description}</p>\n\
         {url_block}\n\
         {buttons}\n\
         {footer}\
         </div>\n\
         </div>",
        background = theme.background_color,
        base = base,
        surface = theme.surface_color,
        padding = theme.padding,
        radius = theme.border_radius,
        shadow = theme.box_shadow,
        border = theme.border_color,
        heading_size = theme.heading_font_size,
        spacing = theme.spacing,
        title = escape_html(&content.title),
        warning = warning,
        description = escape_html(&content.description),
        url_block = url_block(url, theme, content),
        buttons = buttons(
            confirm_action,
            cancel_action,
            &theme.success_color,
            theme,
            content
        ),
        footer = footer,
    )
}

fn base_styles(theme: &InterstitialTheme) -> String {
    format!(
        "font-family: {}; font-size: {}; color: {}",
        theme.font_family, theme.font_size, theme.text_color
    )
}

fn url_block(url: &str, theme: &InterstitialTheme, content: &InterstitialContent) -> String {
    format!(
        "<div class=\"orf-url-display\" style=\"background: {background}; padding: {spacing}; \
         border-radius: {radius}; margin: {spacing} 0; word-break: break-all; \
         font-family: monospace; border: 1px solid {border}\">\
         <strong>{label}</strong><br>\
         <span style=\"color: {primary}; font-weight: bold\">{url}</span></div>",
        background = theme.background_color,
        spacing = theme.spacing,
        radius = theme.border_radius,
        border = theme.border_color,
        label = escape_html(&content.url_display),
        primary = theme.primary_color,
        url = escape_html(url),
    )
}

fn buttons(
    confirm_action: &str,
    cancel_action: &str,
    confirm_color: &str,
    theme: &InterstitialTheme,
    content: &InterstitialContent,
) -> String {
    let button_base = format!(
        "color: white; border: none; padding: 12px 24px; border-radius: {}; \
         cursor: pointer; font-size: {}; font-weight: bold",
        theme.border_radius, theme.font_size
    );
    format!(
        "<div class=\"orf-buttons\" style=\"margin-top: {spacing}; display: flex; \
         gap: {spacing}; justify-content: center; flex-wrap: wrap\">\n\
         <button class=\"orf-confirm-btn\" style=\"background: {confirm_color}; {button_base}\" \
         onclick=\"{confirm_action}\">{confirm_label}</button>\n\
         <button class=\"orf-cancel-btn\" style=\"background: {cancel_color}; {button_base}\" \
         onclick=\"{cancel_action}\">{cancel_label}</button>\n\
         </div>",
        spacing = theme.spacing,
        confirm_color = confirm_color,
        button_base = button_base,
        confirm_action = confirm_action,
        confirm_label = escape_html(&content.confirm_button_text),
        cancel_color = theme.secondary_color,
        cancel_action = cancel_action,
        cancel_label = escape_html(&content.cancel_button_text),
    )
}
