//! # Site Model
//!
//! Everything the engine knows about a site:
//! * [`SiteIdentifier`]: what the operator typed.
//! * [`HostCandidate`]: one device that may or may not answer.
//! * [`ResolvedSiteSet`]: the ordered candidates plus the naming strategy that produced them.
//! * [`ReachabilityResult`]: the outcome of probing one candidate.

mod candidate;
mod identifier;

pub use candidate::{FixedSite, HostCandidate, ReachabilityResult, ResolvedSiteSet, SiteLabel};
pub use identifier::{SiteError, SiteIdentifier};
