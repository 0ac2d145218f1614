pub mod config;
pub mod logging;

pub mod binding;
pub mod confirm;
pub mod firewall;
pub mod http;
pub mod intercept;
pub mod interstitial;
pub mod url_model;
