//! DNS MX resolution and outcome classification.
//!
//! The public entry point is [`check_domain`], which performs a synchronous
//! MX lookup (with a plain-address fallback probe on inconclusive results)
//! and returns a [`ResolutionOutcome`]. [`classify`] turns that outcome into
//! the fixed user-facing [`Verdict`].

mod classify;
mod error;
mod resolver;
mod types;

pub use classify::{MSG_DOMAIN_ABSENT, MSG_MX_MISSING, MSG_VALID, Verdict, classify};
pub use error::MxError as Error;
pub use resolver::{ResolverSettings, check_domain};
pub use types::{MxRecord, ResolutionOutcome};

pub(crate) use resolver::{DnsLookup, LookupError, build_resolver, resolve_with};
