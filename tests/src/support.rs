use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sitelink_common::site::{ResolvedSiteSet, SiteIdentifier};
use sitelink_core::prober::Prober;

pub fn site(s: &str) -> SiteIdentifier {
    s.parse().unwrap()
}

/// Answers from a fixed set and sleeps a per-target delay first.
pub struct ScriptedProber {
    reachable: HashSet<String>,
    delays: HashMap<String, Duration>,
    completion_order: Mutex<Vec<String>>,
}

impl ScriptedProber {
    pub fn new<I, S>(reachable: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reachable: reachable.into_iter().map(Into::into).collect(),
            delays: HashMap::new(),
            completion_order: Mutex::new(Vec::new()),
        }
    }

    /// Later candidates answer sooner: the last one finishes first.
    pub fn with_reversed_delays(mut self, site: &ResolvedSiteSet, step: Duration) -> Self {
        let n = site.len() as u32;
        for (idx, candidate) in site.candidates.iter().enumerate() {
            self.delays.insert(candidate.target(), step * (n - idx as u32));
        }
        self
    }

    pub fn completion_order(&self) -> Vec<String> {
        self.completion_order.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, target: &str) -> bool {
        if let Some(delay) = self.delays.get(target) {
            tokio::time::sleep(*delay).await;
        }
        self.completion_order.lock().unwrap().push(target.to_string());
        self.reachable.contains(target)
    }
}

/// Records the highest number of probes that were running at the same time.
#[derive(Default)]
pub struct InFlightProber {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl InFlightProber {
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for InFlightProber {
    async fn probe(&self, _target: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(15)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        true
    }
}
