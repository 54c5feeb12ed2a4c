use std::collections::BTreeSet;

use hostprobe_common::host::Host;
use tracing::debug;

use crate::probe::Resolve;
use crate::variants::host_variants;

/// Outcome of checking every variant of one host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    /// At least one variant resolved. Never empty.
    Resolved(BTreeSet<String>),
    /// Every variant was probed and none resolved.
    NoneResolved,
}

impl Validation {
    pub fn into_resolved(self) -> Option<BTreeSet<String>> {
        match self {
            Validation::Resolved(forms) => Some(forms),
            Validation::NoneResolved => None,
        }
    }
}

/// Generates a host's variants and keeps the ones the resolver accepts.
pub struct Validator<R> {
    resolver: R,
}

impl<R: Resolve> Validator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn validate(&self, host: &Host) -> Validation {
        let resolved: BTreeSet<String> = host_variants(host.as_str())
            .into_iter()
            .filter(|form| self.resolver.resolves(form))
            .collect();

        debug!(%host, resolved = resolved.len(), "validated");

        if resolved.is_empty() {
            Validation::NoneResolved
        } else {
            Validation::Resolved(resolved)
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
