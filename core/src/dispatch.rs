//! # Dispatch
//!
//! Fans one validation task per host out over a fixed-size worker pool and
//! folds every resolved form into a single [`ResultCollection`].
//!
//! The pool never runs more than the configured number of tasks at once;
//! surplus tasks queue until a worker frees up. [`Dispatcher::run`] returns
//! only after every submitted task has finished, so the collection it hands
//! back is complete.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use hostprobe_common::config::{Config, WorkerCount};
use hostprobe_common::host::Host;
use hostprobe_common::{info, warn};
use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;

use crate::collection::ResultCollection;
use crate::probe::Resolve;
use crate::validator::Validator;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to start a pool of {workers} workers")]
    Pool {
        workers: usize,
        #[source]
        source: ThreadPoolBuildError,
    },
}

/// Progress callback, invoked with the number of hosts checked so far.
pub type OnChecked<'a> = Option<&'a (dyn Fn(usize) + Sync)>;

#[derive(Clone, Copy, Debug)]
pub struct Dispatcher {
    workers: WorkerCount,
    submission_limit: Option<usize>,
}

impl Dispatcher {
    pub fn new(workers: WorkerCount, submission_limit: Option<usize>) -> Self {
        Self {
            workers,
            submission_limit,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.workers, cfg.submission_limit)
    }

    /// The prefix of `hosts` that will actually be dispatched.
    pub fn submitted<'h>(&self, hosts: &'h [Host]) -> &'h [Host] {
        match self.submission_limit {
            Some(limit) if limit < hosts.len() => &hosts[..limit],
            _ => hosts,
        }
    }

    pub fn run<R: Resolve>(
        &self,
        hosts: &[Host],
        validator: &Validator<R>,
        on_checked: OnChecked<'_>,
    ) -> Result<ResultCollection, DispatchError> {
        let workers: usize = self.workers.get();
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("hostprobe-worker-{idx}"))
            .build()
            .map_err(|source| DispatchError::Pool { workers, source })?;

        let submitted: &[Host] = self.submitted(hosts);
        if submitted.len() < hosts.len() {
            warn!(
                "Submission limit reached: {} of {} hosts will not be checked",
                hosts.len() - submitted.len(),
                hosts.len()
            );
        }
        info!("Checking {} hosts with {workers} workers", submitted.len());

        let results: Mutex<ResultCollection> = Mutex::new(ResultCollection::new());
        let checked = AtomicUsize::new(0);

        pool.scope(|scope| {
            for host in submitted {
                let results = &results;
                let checked = &checked;
                scope.spawn(move |_| {
                    if let Some(forms) = validator.validate(host).into_resolved() {
                        results
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .extend(forms);
                    }
                    let done: usize = checked.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(report) = on_checked {
                        report(done);
                    }
                });
            }
        });

        let results: ResultCollection = results.into_inner().unwrap_or_else(PoisonError::into_inner);
        info!(
            "Checked {} hosts, {} forms resolved",
            checked.load(Ordering::Relaxed),
            results.len()
        );
        Ok(results)
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
