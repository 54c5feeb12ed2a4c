pub mod resolve;

use std::path::PathBuf;

use clap::Parser;
use hostprobe_common::config::{Config, DEFAULT_OUTPUT, LEGACY_SUBMISSION_LIMIT, WorkerCount};

#[derive(Parser)]
#[command(name = "hostprobe")]
#[command(about = "Find which www/scheme variants of a host resolve.")]
pub struct CommandLine {
    /// IP address or domain to check
    #[arg(short = 's', long = "site", value_name = "SITE")]
    pub site: Option<String>,

    /// File of newline-separated domains to check
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Number of hosts checked in parallel
    #[arg(short = 't', long = "threads", value_name = "THREADS", default_value_t = WorkerCount::default())]
    pub threads: WorkerCount,

    /// Where the resolved hosts are written (overwritten)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Stop after the first 11 hosts, matching the behaviour of older releases
    #[arg(long = "legacy-limit")]
    pub legacy_limit: bool,

    /// Reduce output (-q hides banners, -qq only errors)
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            workers: self.threads,
            output: self.output.clone(),
            submission_limit: self.legacy_limit.then_some(LEGACY_SUBMISSION_LIMIT),
            quiet: self.quiet,
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
