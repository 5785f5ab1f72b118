#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }

    /// A record is usable when its exchange names a host at all. The
    /// preference field is not a criterion (DNS always supplies one, 0 is
    /// legal).
    pub fn is_usable(&self) -> bool {
        !self.exchange.trim().is_empty()
    }
}

/// Raw result of one resolution attempt for a domain. Consumed immediately
/// by the classifier; never persisted.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// MX answer with at least one usable record.
    HasUsableMx(Vec<MxRecord>),
    /// MX answer present but no record names a host.
    MxPresentButUnusable(Vec<MxRecord>),
    /// Empty MX answer, but the domain itself resolves.
    NoMxAnswer,
    /// Authoritative negative (NXDOMAIN), or an empty answer for a domain
    /// that does not resolve either.
    DomainAbsent,
    /// No authoritative server could be reached.
    NoNameservers,
    /// Any other resolver error; `domain_resolves` records what the
    /// plain-address fallback probe found.
    ResolverFailure { domain_resolves: bool },
}

impl ResolutionOutcome {
    pub fn records(&self) -> &[MxRecord] {
        match self {
            Self::HasUsableMx(records) | Self::MxPresentButUnusable(records) => records.as_slice(),
            _ => &[],
        }
    }
}
