//! # Run Configuration
//!
//! Values that shape a single run: how many workers resolve in parallel, where
//! the results end up and whether the legacy submission cap is applied.

use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_OUTPUT: &str = "resolve.out";

/// Number of hosts dispatched before submission stops when the legacy cap is enabled.
pub const LEGACY_SUBMISSION_LIMIT: usize = 11;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid worker count '{0}': expected a positive integer")]
    InvalidWorkerCount(String),
}

/// Upper bound on concurrently running validation tasks. Always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerCount(NonZeroUsize);

impl WorkerCount {
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or_else(|| ConfigError::InvalidWorkerCount(count.to_string()))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for WorkerCount {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_WORKERS).unwrap_or(NonZeroUsize::MIN))
    }
}

impl fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkerCount {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroUsize>()
            .map(Self)
            .map_err(|_| ConfigError::InvalidWorkerCount(s.to_string()))
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub workers: WorkerCount,
    /// Destination for the newline-joined results. Overwritten on every run.
    pub output: PathBuf,
    /// Stop dispatching after this many hosts. `None` dispatches everything.
    pub submission_limit: Option<usize>,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: WorkerCount::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            submission_limit: None,
            quiet: 0,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
