use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::collection::ResultCollection;

/// Final destination of a run's results. Consumes the collection, so it is written once.
pub trait ResultSink {
    fn write(self, results: ResultCollection) -> anyhow::Result<()>;
}

/// Writes newline-joined results to a file, replacing whatever was there.
#[derive(Clone, Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResultSink for FileSink {
    fn write(self, results: ResultCollection) -> anyhow::Result<()> {
        fs::write(&self.path, results.to_text())
            .with_context(|| format!("writing results to {}", self.path.display()))
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
