use std::fmt;
use std::net::IpAddr;

/// Region sites whose devices are listed explicitly rather than templated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixedSite {
    Ukred,
    Ukslo,
}

impl fmt::Display for FixedSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedSite::Ukred => f.write_str("UKRED"),
            FixedSite::Ukslo => f.write_str("UKSLO"),
        }
    }
}

/// The naming strategy a [`ResolvedSiteSet`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteLabel {
    FixedTable(FixedSite),
    StandardTemplate,
    AlternateTemplate,
}

impl SiteLabel {
    pub fn is_fixed_table(&self) -> bool {
        matches!(self, SiteLabel::FixedTable(_))
    }
}

impl fmt::Display for SiteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteLabel::FixedTable(site) => write!(f, "fixed table ({site})"),
            SiteLabel::StandardTemplate => f.write_str("standard template"),
            SiteLabel::AlternateTemplate => f.write_str("alternate template"),
        }
    }
}

/// A device considered for probing.
///
/// `address` is only set for fixed-table sites. Templated candidates are
/// probed and connected to by `name`, leaving resolution to the system resolver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HostCandidate {
    pub name: String,
    pub address: Option<IpAddr>,
}

impl HostCandidate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
        }
    }

    pub fn with_address(name: impl Into<String>, address: IpAddr) -> Self {
        Self {
            name: name.into(),
            address: Some(address),
        }
    }

    /// What gets pinged and what the SSH client connects to.
    pub fn target(&self) -> String {
        match self.address {
            Some(ip) => ip.to_string(),
            None => self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSiteSet {
    pub label: SiteLabel,
    pub candidates: Vec<HostCandidate>,
}

impl ResolvedSiteSet {
    pub fn new(label: SiteLabel, candidates: Vec<HostCandidate>) -> Self {
        Self { label, candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// How many probes this set may have in flight at once.
    ///
    /// Fixed tables are walked one host at a time in declared order; templated
    /// sites use the configured cap.
    pub fn concurrency_limit(&self, templated_cap: usize) -> usize {
        if self.label.is_fixed_table() {
            1
        } else {
            templated_cap.max(1)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReachabilityResult {
    pub candidate: HostCandidate,
    pub reachable: bool,
}
