//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::config::defaults::...")]` attributes on
//! [`super::Config`] fields.

/// Listen on all interfaces.
pub fn bind_address() -> String {
    "0.0.0.0".to_string()
}

pub fn port() -> u16 {
    8000
}

pub fn cors_allow_origin() -> String {
    "*".to_string()
}

/// 1 MiB
pub fn max_body_bytes() -> usize {
    1024 * 1024
}
