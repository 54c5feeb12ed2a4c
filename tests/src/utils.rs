use std::collections::HashSet;
use std::sync::Mutex;

use hostprobe_common::host::Host;
use hostprobe_core::probe::Resolve;

/// Deterministic stand-in for the platform resolver that also records every probe.
pub struct MockResolver {
    resolvable: HashSet<String>,
    probed: Mutex<Vec<String>>,
}

impl MockResolver {
    pub fn new<I, S>(resolvable: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resolvable: resolvable.into_iter().map(Into::into).collect(),
            probed: Mutex::new(Vec::new()),
        }
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

impl Resolve for MockResolver {
    fn resolves(&self, host: &str) -> bool {
        self.probed.lock().unwrap().push(host.to_string());
        self.resolvable.contains(host)
    }
}

pub fn hosts(names: &[&str]) -> Vec<Host> {
    names.iter().map(|name| Host::from(*name)).collect()
}
