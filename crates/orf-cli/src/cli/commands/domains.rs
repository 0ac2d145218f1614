//! `orf domains` – list the allowed destination domains.

use orf_core::config::OrfConfig;

pub fn run_domains(cfg: &OrfConfig) {
    if cfg.allowed_domains.is_empty() {
        println!("no allowed domains configured");
        return;
    }
    for domain in &cfg.allowed_domains {
        println!("{domain}");
    }
}
