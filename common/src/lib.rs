pub mod config;
pub mod host;
pub mod input;
pub mod logging;

#[doc(hidden)]
pub use tracing;
