//! `orf check <url>...` – validate destinations against the policy.

use anyhow::{bail, Result};
use orf_core::config::OrfConfig;
use orf_core::firewall::RedirectFirewall;

pub fn run_check(cfg: &OrfConfig, urls: &[String], show_violations: bool) -> Result<()> {
    let mut firewall = RedirectFirewall::new(cfg.policy());
    let mut blocked = 0usize;

    for url in urls {
        let decision = firewall.validate_redirect(url);
        if decision.allowed {
            match decision.sanitized_url {
                Some(sanitized) => println!("allow {url} -> {sanitized}"),
                None => println!("allow {url}"),
            }
        } else {
            blocked += 1;
            let reason = decision.reason.as_deref().unwrap_or("unknown reason");
            println!("block {url} ({reason})");
        }
    }

    if show_violations {
        for violation in firewall.violations() {
            println!("violation: {} ({})", violation.original_url, violation.reason);
        }
    }

    if blocked > 0 {
        bail!("{blocked} of {} URLs blocked by policy", urls.len());
    }
    Ok(())
}
