use super::ResolutionOutcome;

// Status strings reproduced verbatim for compatibility with existing
// consumers of the report output.
pub const MSG_VALID: &str = "domain is valid";
pub const MSG_MX_MISSING: &str = "MX records are missing or invalid";
pub const MSG_DOMAIN_ABSENT: &str = "domain does not exist";

/// User-facing reading of one [`ResolutionOutcome`].
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: &'static str,
}

/// Map a resolution outcome to one of the three status classes.
///
/// Only a usable MX answer counts as deliverable. Everything else degrades
/// to "mail records missing" when the domain demonstrably exists and
/// "does not exist" otherwise, infrastructure errors included.
pub fn classify(outcome: &ResolutionOutcome) -> Verdict {
    match outcome {
        ResolutionOutcome::HasUsableMx(_) => Verdict {
            valid: true,
            message: MSG_VALID,
        },
        ResolutionOutcome::MxPresentButUnusable(_)
        | ResolutionOutcome::NoMxAnswer
        | ResolutionOutcome::ResolverFailure {
            domain_resolves: true,
        } => Verdict {
            valid: false,
            message: MSG_MX_MISSING,
        },
        ResolutionOutcome::DomainAbsent
        | ResolutionOutcome::NoNameservers
        | ResolutionOutcome::ResolverFailure {
            domain_resolves: false,
        } => Verdict {
            valid: false,
            message: MSG_DOMAIN_ABSENT,
        },
    }
}
