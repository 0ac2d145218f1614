//! Redirect policy evaluation.
//!
//! This module owns the allow/block decision for a destination URL:
//! - an ordered validation pipeline over a [`PolicyConfig`] snapshot
//! - an append-only [`ViolationLog`] of whitelist-mismatch rejections
//!
//! The firewall is pure and reusable independent of any UI surface; the
//! interceptor and adapters in the sibling modules feed it URLs and act on
//! the [`Decision`] values it returns.

mod decision;
mod policy;
mod state;
mod violations;

pub use decision::Decision;
pub use policy::{CustomValidator, PolicyConfig, PolicyPatch};
pub use state::RedirectFirewall;
pub use violations::{Violation, ViolationLog};
