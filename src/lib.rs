#![forbid(unsafe_code)]
//! mxcheck_lib — MX deliverability pre-check for batches of email addresses.
//!
//! The pipeline per address: extract the domain ([`parse_address`]), resolve
//! its MX situation ([`check_domain`]), classify the outcome into a
//! user-facing verdict ([`classify`]). [`validate_all`] runs the whole batch
//! with per-item isolation.

pub mod address;
pub mod batch;
pub mod mx;

pub use address::{AddressError, parse_address};
pub use batch::{ValidationResult, validate_all};
pub use mx::{
    Error as MxError, MSG_DOMAIN_ABSENT, MSG_MX_MISSING, MSG_VALID, MxRecord, ResolutionOutcome,
    ResolverSettings, Verdict, check_domain, classify,
};
