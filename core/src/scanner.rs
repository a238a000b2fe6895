//! The scan orchestrator.
//!
//! Every candidate of a [`ResolvedSiteSet`] is probed exactly once. Probes run
//! as tokio tasks gated by a semaphore; each task reports back with the index
//! of its candidate and the outcome lands in that slot, so the returned list
//! always follows the candidate order no matter which probe finishes first.
//!
//! Fixed-table sites run with a limit of one, which makes the walk strictly
//! sequential in declared order because a permit is taken before each task is
//! spawned.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sitelink_common::site::{ReachabilityResult, ResolvedSiteSet};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::prober::Prober;

/// Called after each probe with `(completed, total)`.
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Probes a whole site using the policy that fits its naming strategy.
pub struct SiteScanner {
    prober: Arc<dyn Prober>,
    templated_limit: usize,
}

impl SiteScanner {
    pub fn new(prober: Arc<dyn Prober>, templated_limit: usize) -> Self {
        Self {
            prober,
            templated_limit,
        }
    }

    pub async fn scan_site(
        &self,
        site: &ResolvedSiteSet,
        on_progress: Option<ProgressCallback>,
    ) -> Vec<ReachabilityResult> {
        let limit = site.concurrency_limit(self.templated_limit);
        let results = scan(site, Arc::clone(&self.prober), limit, on_progress).await;

        let reachable = results.iter().filter(|r| r.reachable).count();
        debug!(
            target: "sitelink::scan",
            "{reachable} of {} hosts reachable ({})",
            results.len(),
            site.label
        );
        results
    }
}

/// Probes every candidate with at most `limit` probes in flight.
///
/// The output has one entry per candidate, in candidate order. A probe task
/// that dies only marks its own candidate unreachable.
pub async fn scan(
    site: &ResolvedSiteSet,
    prober: Arc<dyn Prober>,
    limit: usize,
    on_progress: Option<ProgressCallback>,
) -> Vec<ReachabilityResult> {
    let total = site.len();
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));
    let completed = Arc::new(AtomicUsize::new(0));
    let mut tasks: JoinSet<(usize, bool)> = JoinSet::new();

    for (idx, candidate) in site.candidates.iter().enumerate() {
        let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
            error!("Probe semaphore closed before {} was dispatched", candidate.name);
            break;
        };

        let prober = Arc::clone(&prober);
        let completed = Arc::clone(&completed);
        let on_progress = on_progress.clone();
        let target = candidate.target();

        tasks.spawn(async move {
            let alive = prober.probe(&target).await;
            drop(permit);

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(cb) = on_progress {
                cb(done, total);
            }
            (idx, alive)
        });
    }

    let mut slots: Vec<bool> = vec![false; total];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((idx, alive)) => slots[idx] = alive,
            Err(e) => error!("Probe task failed: {e}"),
        }
    }

    site.candidates
        .iter()
        .cloned()
        .zip(slots)
        .map(|(candidate, reachable)| ReachabilityResult {
            candidate,
            reachable,
        })
        .collect()
}
