//! Logging macros shared by every crate in the workspace.
//!
//! These are thin wrappers over [`tracing`]. The CLI's formatter keys off the
//! targets below to decide how a line is rendered.

/// Target for events that mark a completed step.
pub const SUCCESS_TARGET: &str = "hostprobe::success";

/// Target for pre-formatted lines that are written without a status symbol.
pub const PRINT_TARGET: &str = "hostprobe::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::logging::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
