//! `orf render <url>` – preview the confirmation interstitial.

use orf_core::config::OrfConfig;
use orf_core::interstitial::{render_interstitial, InterstitialConfig, InterstitialMode};

pub fn run_render(cfg: &OrfConfig, url: &str, full_page: bool) {
    let mut interstitial: InterstitialConfig = cfg.interstitial.clone().unwrap_or_default();
    if full_page {
        interstitial.mode = InterstitialMode::FullPage;
    }
    // Placeholder action hooks; a hosting page wires its own per request.
    let html = render_interstitial(url, "orf.confirm()", "orf.cancel()", &interstitial);
    println!("{html}");
}
