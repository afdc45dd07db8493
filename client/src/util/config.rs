//! Build-time client configuration.
//!
//! `FLEET_BACKEND_URL` is read when the WASM bundle is compiled. Unset means
//! same-origin, so `/api/...` goes to whoever served the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend origin requests are sent to, without a trailing slash.
pub fn backend_url() -> &'static str {
    normalize_base_url(option_env!("FLEET_BACKEND_URL").unwrap_or_default())
}

fn normalize_base_url(raw: &'static str) -> &'static str {
    raw.trim().trim_end_matches('/')
}
