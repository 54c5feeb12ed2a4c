//! Name-resolution probe.
//!
//! A probe answers a single question: does this string resolve to at least
//! one address through the platform resolver? Every failure cause (unknown
//! host, NXDOMAIN, timeout, unreachable network, a string the resolver
//! refuses outright) is folded into `false`. Callers never see why a lookup
//! failed, only that it did.

use std::io;
use std::net::{IpAddr, ToSocketAddrs};

use tracing::{debug, trace};

pub trait Resolve: Send + Sync {
    fn resolves(&self, host: &str) -> bool;
}

/// Any thread-safe predicate can stand in for a resolver.
impl<F> Resolve for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn resolves(&self, host: &str) -> bool {
        self(host)
    }
}

/// Forward lookup through the operating system (`getaddrinfo` on unix).
///
/// Blocking; bounded only by the platform resolver's own timeouts.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs = (host, 0).to_socket_addrs()?;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}

impl Resolve for SystemResolver {
    fn resolves(&self, host: &str) -> bool {
        match self.lookup(host) {
            Ok(addrs) if !addrs.is_empty() => {
                trace!(host, addr = %addrs[0], "resolved");
                true
            }
            Ok(_) => {
                debug!(host, "lookup returned no addresses");
                false
            }
            Err(e) => {
                debug!(host, error = %e, "lookup failed");
                false
            }
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
