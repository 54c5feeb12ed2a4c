//! # Host Input
//!
//! Assembles the ordered list of hosts to check from a single command-line
//! host and/or a newline-delimited file.
//!
//! File entries that do not look like a URL-ish token are skipped with a
//! warning. A missing source or an unreadable file is fatal.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::host::Host;
use crate::warn;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("a host, a file of hosts, or both must be passed in")]
    MissingInput,
    #[error("failed to read hosts from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Builds the host list: the single host first, followed by file entries in file order.
pub fn collect_hosts(single: Option<&str>, file: Option<&Path>) -> Result<Vec<Host>, InputError> {
    if single.is_none() && file.is_none() {
        return Err(InputError::MissingInput);
    }

    let mut hosts: Vec<Host> = single.map(Host::from).into_iter().collect();

    if let Some(path) = file {
        let read_err = |source: io::Error| InputError::Read {
            path: path.to_path_buf(),
            source,
        };
        let reader = BufReader::new(File::open(path).map_err(read_err)?);
        hosts.extend(parse_hosts(reader).map_err(read_err)?);
    }

    Ok(hosts)
}

/// Reads one host per line, skipping blank and malformed lines.
pub fn parse_hosts<R: BufRead>(reader: R) -> io::Result<Vec<Host>> {
    let mut hosts = Vec::new();

    for raw in reader.split(b'\n') {
        let raw: Vec<u8> = raw?;
        let line: String = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!("Skipped: {}", String::from_utf8_lossy(e.as_bytes()).trim_end());
                continue;
            }
        };
        let entry = line.trim_end_matches('\r');
        if entry.trim().is_empty() {
            continue;
        }
        if !is_well_formed(entry) {
            warn!("Skipped: {entry}");
            continue;
        }
        hosts.push(Host::from(entry));
    }

    Ok(hosts)
}

/// A line is accepted if it parses as a URL, given an `https://` scheme when it has none.
pub fn is_well_formed(entry: &str) -> bool {
    if entry.contains("://") {
        Url::parse(entry).is_ok()
    } else {
        Url::parse(&format!("https://{entry}")).is_ok()
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
