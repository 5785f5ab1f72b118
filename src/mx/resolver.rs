use std::net::IpAddr;
use std::time::Duration;

use trust_dns_resolver::{
    Resolver,
    config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
};

use super::{Error, MxRecord, ResolutionOutcome};

/// Resolver configuration. Timeout and nameservers are explicit inputs
/// rather than ambient resolver defaults, so runs are reproducible.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    pub timeout_ms: u64,
    pub attempts: usize,
    /// Explicit nameserver IPs (port 53, UDP+TCP). Empty means the system
    /// resolver configuration.
    pub nameservers: Vec<IpAddr>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            attempts: 2,
            nameservers: Vec::new(),
        }
    }
}

impl ResolverSettings {
    /// Return the per-request timeout as a [`Duration`]. Zero keeps the
    /// resolver library default.
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.timeout_ms))
        }
    }
}

/// Resolve the MX situation of `domain` using a live resolver built from
/// `settings`.
///
/// Every DNS-level failure is folded into the returned
/// [`ResolutionOutcome`]; the only error surfaced here is a resolver that
/// could not be constructed.
pub fn check_domain(domain: &str, settings: &ResolverSettings) -> Result<ResolutionOutcome, Error> {
    let resolver = build_resolver(settings)?;
    Ok(resolve_with(&resolver, domain))
}

pub(crate) fn build_resolver(settings: &ResolverSettings) -> Result<Resolver, Error> {
    let mut opts = ResolverOpts::default();
    if let Some(timeout) = settings.timeout() {
        opts.timeout = timeout;
    }
    opts.attempts = settings.attempts;

    let config = if settings.nameservers.is_empty() {
        let (config, _) = trust_dns_resolver::system_conf::read_system_conf()
            .map_err(Error::resolver_init)?;
        config
    } else {
        ResolverConfig::from_parts(
            None,
            Vec::new(),
            NameServerConfigGroup::from_ips_clear(&settings.nameservers, 53, true),
        )
    };

    Resolver::new(config, opts).map_err(Error::resolver_init)
}

/// Run the MX decision chain against any [`DnsLookup`] capability.
///
/// A non-empty answer is sorted (ascending preference) and deduplicated,
/// then split on usability. An empty answer and any generic failure both
/// funnel through the same plain-resolution probe to pick between the
/// "exists without mail service" and "does not exist" readings.
pub(crate) fn resolve_with<R>(resolver: &R, domain: &str) -> ResolutionOutcome
where
    R: DnsLookup,
{
    match resolver.lookup_mx(domain) {
        Ok(mut records) if !records.is_empty() => {
            records.sort();
            records.dedup();
            if records.iter().any(MxRecord::is_usable) {
                ResolutionOutcome::HasUsableMx(records)
            } else {
                ResolutionOutcome::MxPresentButUnusable(records)
            }
        }
        Ok(_) => {
            #[cfg(feature = "with-tracing")]
            tracing::debug!(domain, "empty MX answer, probing plain resolution");
            probe_fallback(
                resolver,
                domain,
                ResolutionOutcome::NoMxAnswer,
                ResolutionOutcome::DomainAbsent,
            )
        }
        Err(LookupError::NxDomain) => ResolutionOutcome::DomainAbsent,
        Err(LookupError::NoNameservers) => ResolutionOutcome::NoNameservers,
        Err(LookupError::Other(_reason)) => {
            #[cfg(feature = "with-tracing")]
            tracing::debug!(domain, reason = %_reason, "MX lookup failed, probing plain resolution");
            probe_fallback(
                resolver,
                domain,
                ResolutionOutcome::ResolverFailure {
                    domain_resolves: true,
                },
                ResolutionOutcome::ResolverFailure {
                    domain_resolves: false,
                },
            )
        }
    }
}

/// Shared disambiguation probe: a plain address lookup on the domain itself
/// decides between the `present` and `absent` reading of an inconclusive MX
/// result.
fn probe_fallback<R>(
    resolver: &R,
    domain: &str,
    present: ResolutionOutcome,
    absent: ResolutionOutcome,
) -> ResolutionOutcome
where
    R: DnsLookup,
{
    if resolver.resolves(domain) {
        present
    } else {
        absent
    }
}

/// A null MX (".") normalizes to an empty exchange and counts as unusable.
pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

/// Coarse failure classes the decision chain distinguishes. Everything the
/// resolver library reports beyond these three folds into `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LookupError {
    NxDomain,
    NoNameservers,
    Other(String),
}

/// The DNS capability the checker depends on: an MX query plus a plain
/// address probe. `Ok(vec![])` from [`lookup_mx`](DnsLookup::lookup_mx)
/// means the query succeeded with an empty answer.
pub(crate) trait DnsLookup {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError>;
    fn resolves(&self, domain: &str) -> bool;
}

impl DnsLookup for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        match Resolver::mx_lookup(self, domain) {
            Ok(lookup) => {
                let mut records = Vec::new();
                for mx in lookup.iter() {
                    let exchange = normalize_exchange(mx.exchange().to_utf8());
                    records.push(MxRecord::new(mx.preference(), exchange));
                }
                Ok(records)
            }
            Err(err) => classify_lookup_error(err),
        }
    }

    fn resolves(&self, domain: &str) -> bool {
        self.lookup_ip(domain)
            .map(|lookup| lookup.iter().next().is_some())
            .unwrap_or(false)
    }
}

fn classify_lookup_error(err: ResolveError) -> Result<Vec<MxRecord>, LookupError> {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                Err(LookupError::NxDomain)
            } else {
                // NOERROR with an empty answer: the resolver library reports
                // this as an error, the decision chain treats it as success.
                Ok(Vec::new())
            }
        }
        ResolveErrorKind::NoConnections => Err(LookupError::NoNameservers),
        _ => Err(LookupError::Other(err.to_string())),
    }
}

#[cfg(test)]
impl DnsLookup for crate::mx::tests::StubResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        (self.on_mx)(domain)
    }

    fn resolves(&self, domain: &str) -> bool {
        (self.on_host)(domain)
    }
}
