//! Batch orchestration: run the parse → resolve → classify pipeline over a
//! list of candidate addresses.
//!
//! The defining property of this layer is per-item isolation: a malformed
//! address or a dead domain produces a result row and the batch moves on.

use crate::address::parse_address;
use crate::mx::{self, DnsLookup, ResolverSettings, classify};

/// One report row. Immutable once produced; the batch output preserves the
/// input order of non-blank lines.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub email: String,
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn new(email: impl Into<String>, valid: bool, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            valid,
            message: message.into(),
        }
    }
}

/// Validate every non-blank line against a live resolver built from
/// `settings`. Blank and whitespace-only lines produce no row.
///
/// Nothing here aborts the batch. If the resolver itself cannot be built,
/// every non-blank line still gets a row carrying the bootstrap error.
pub fn validate_all<I, S>(lines: I, settings: &ResolverSettings) -> Vec<ValidationResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match mx::build_resolver(settings) {
        Ok(resolver) => validate_all_with(&resolver, lines),
        Err(err) => lines
            .into_iter()
            .filter(|line| !line.as_ref().trim().is_empty())
            .map(|line| {
                ValidationResult::new(line.as_ref().trim(), false, format!("Error: {err}"))
            })
            .collect(),
    }
}

pub(crate) fn validate_all_with<R, I, S>(resolver: &R, lines: I) -> Vec<ValidationResult>
where
    R: DnsLookup,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut results = Vec::new();
    for line in lines {
        let email = line.as_ref().trim();
        if email.is_empty() {
            continue;
        }
        results.push(check_one(resolver, email));
    }
    results
}

fn check_one<R>(resolver: &R, email: &str) -> ValidationResult
where
    R: DnsLookup,
{
    match parse_address(email) {
        Ok(domain) => {
            let verdict = classify(&mx::resolve_with(resolver, &domain));
            ValidationResult::new(email, verdict.valid, verdict.message)
        }
        Err(err) => ValidationResult::new(email, false, format!("Invalid email format: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mx::{LookupError, MxRecord};
    use proptest::prelude::*;

    /// Deterministic DNS keyed by domain name.
    struct ScriptedDns;

    impl DnsLookup for ScriptedDns {
        fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError> {
            match domain {
                "example.com" => Ok(vec![MxRecord::new(10, "mx1.example.com")]),
                "no-mail.example" => Ok(Vec::new()),
                "flaky.example" => Err(LookupError::Other("server failure".into())),
                _ => Err(LookupError::NxDomain),
            }
        }

        fn resolves(&self, domain: &str) -> bool {
            domain == "no-mail.example" || domain == "flaky.example"
        }
    }

    /// Every domain is an authoritative negative; the probe never runs.
    struct AbsentDns;

    impl DnsLookup for AbsentDns {
        fn lookup_mx(&self, _domain: &str) -> Result<Vec<MxRecord>, LookupError> {
            Err(LookupError::NxDomain)
        }

        fn resolves(&self, _domain: &str) -> bool {
            false
        }
    }

    #[test]
    fn malformed_middle_entry_does_not_abort_the_batch() {
        let lines = [
            "good@example.com",
            "bad-email",
            "ghost@nonexistent-xyz.invalid",
        ];
        let results = validate_all_with(&ScriptedDns, lines);

        assert_eq!(results.len(), 3);
        assert!(results[0].valid);
        assert_eq!(results[0].message, "domain is valid");
        assert!(!results[1].valid);
        assert!(results[1].message.starts_with("Invalid email format:"));
        assert!(!results[2].valid);
        assert_eq!(results[2].message, "domain does not exist");
    }

    #[test]
    fn blank_lines_produce_no_rows() {
        let lines = ["", "   ", "user@example.com", "\t"];
        let results = validate_all_with(&ScriptedDns, lines);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].email, "user@example.com");
    }

    #[test]
    fn domain_without_mail_service_gets_missing_mx_message() {
        let results = validate_all_with(&ScriptedDns, ["user@no-mail.example"]);
        assert_eq!(results[0].message, "MX records are missing or invalid");
        assert!(!results[0].valid);
    }

    #[test]
    fn transient_failure_degrades_to_missing_mx_when_domain_resolves() {
        let results = validate_all_with(&ScriptedDns, ["user@flaky.example"]);
        assert_eq!(results[0].message, "MX records are missing or invalid");
    }

    #[test]
    fn rows_keep_trimmed_input_text() {
        let results = validate_all_with(&ScriptedDns, ["  user@EXAMPLE.com  "]);
        assert_eq!(results[0].email, "user@EXAMPLE.com");
        assert!(results[0].valid);
    }

    proptest! {
        #[test]
        fn one_row_per_non_blank_line_in_order(
            lines in proptest::collection::vec("[a-z @.]{0,16}", 0..24),
        ) {
            let results = validate_all_with(&AbsentDns, &lines);
            let expected: Vec<&str> = lines
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .collect();

            prop_assert_eq!(results.len(), expected.len());
            for (row, email) in results.iter().zip(expected) {
                prop_assert_eq!(row.email.as_str(), email);
            }

            let again = validate_all_with(&AbsentDns, &lines);
            prop_assert_eq!(results, again);
        }
    }
}
