//! Maps a site identifier to the devices expected at that site.
//!
//! Region sites (`UKRED`, `UKSLO`) come from fixed name/address tables. Any
//! other identifier is treated as a site number and expanded through a role
//! template: `7xxx` sites get the `d0` prefix and the alternate role list,
//! everything else gets `s0` and the standard list.

use std::net::IpAddr;

use sitelink_common::site::{FixedSite, HostCandidate, ResolvedSiteSet, SiteIdentifier, SiteLabel};
use tracing::debug;

mod tables;

use tables::{ALTERNATE_ROLES, DOMAIN, STANDARD_ROLES, UKRED_HOSTS, UKSLO_HOSTS};

const ALTERNATE_SITE_PREFIX: char = '7';

/// Resolves `site` to its ordered candidate set.
///
/// Total and pure: every identifier maps to exactly one strategy.
pub fn resolve(site: &SiteIdentifier) -> ResolvedSiteSet {
    let label = resolve_label(site);
    let resolved = match label {
        SiteLabel::FixedTable(region) => fixed_table(region),
        SiteLabel::AlternateTemplate => {
            templated(label, &prefixed_code("d0", site), &ALTERNATE_ROLES)
        }
        SiteLabel::StandardTemplate => {
            templated(label, &prefixed_code("s0", site), &STANDARD_ROLES)
        }
    };

    debug!(
        "Resolved site {site} via {} to {} candidates",
        resolved.label,
        resolved.len()
    );
    resolved
}

/// Site code used in templated hostnames, e.g. `s0123` or `d07001`.
fn prefixed_code(prefix: &str, site: &SiteIdentifier) -> String {
    format!("{prefix}{}", site.normalized())
}

fn resolve_label(site: &SiteIdentifier) -> SiteLabel {
    let normalized = site.normalized();
    if normalized.starts_with("ukred") {
        SiteLabel::FixedTable(FixedSite::Ukred)
    } else if normalized.starts_with("ukslo") {
        SiteLabel::FixedTable(FixedSite::Ukslo)
    } else if normalized.starts_with(ALTERNATE_SITE_PREFIX) {
        SiteLabel::AlternateTemplate
    } else {
        SiteLabel::StandardTemplate
    }
}

fn fixed_table(site: FixedSite) -> ResolvedSiteSet {
    let table = match site {
        FixedSite::Ukred => &UKRED_HOSTS,
        FixedSite::Ukslo => &UKSLO_HOSTS,
    };

    let candidates = table
        .iter()
        .map(|(name, ip)| HostCandidate::with_address(*name, IpAddr::V4(*ip)))
        .collect();

    ResolvedSiteSet::new(SiteLabel::FixedTable(site), candidates)
}

fn templated(label: SiteLabel, site_code: &str, roles: &[&str]) -> ResolvedSiteSet {
    let candidates = roles
        .iter()
        .map(|role| HostCandidate::named(format!("{role}.{site_code}.{DOMAIN}")))
        .collect();

    ResolvedSiteSet::new(label, candidates)
}
