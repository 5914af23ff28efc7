// Library exports for the server binary and integration tests.
//
// The transform itself lives in the `unistyle-styles` crate and is pure; this
// crate only adds the transports around it (HTTP server and CLI) plus config
// and logging.

/// Application version (root crate version).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod logging;
pub mod server;

pub use unistyle_styles::{Style, transform};
