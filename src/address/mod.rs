//! Address parsing: extract the domain a deliverability check targets.
//!
//! Deliberately permissive — no RFC 5321 local-part grammar here. The DNS
//! checks downstream are the real filter; this layer only rejects inputs
//! that cannot name a domain at all.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("missing '@' separator in '{0}'")]
    MissingSeparator(String),
    #[error("empty domain after '@' in '{0}'")]
    EmptyDomain(String),
}

/// Extract the domain from `raw`: the substring after the *last* `@`,
/// trimmed and lowercased.
pub fn parse_address(raw: &str) -> Result<String, AddressError> {
    let input = raw.trim();
    let Some((_, domain)) = input.rsplit_once('@') else {
        return Err(AddressError::MissingSeparator(input.to_string()));
    };
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(AddressError::EmptyDomain(input.to_string()));
    }
    Ok(domain.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_domain() {
        assert_eq!(parse_address("user@example.com").unwrap(), "example.com");
    }

    #[test]
    fn lowercases_and_trims_domain() {
        assert_eq!(parse_address("  user@EXAMPLE.Com  ").unwrap(), "example.com");
    }

    #[test]
    fn splits_on_last_at_sign() {
        assert_eq!(parse_address("we\"ird@user@example.com").unwrap(), "example.com");
    }

    #[test]
    fn rejects_missing_at_sign() {
        let err = parse_address("no-at-sign").expect_err("must fail");
        assert_eq!(err, AddressError::MissingSeparator("no-at-sign".into()));
    }

    #[test]
    fn rejects_empty_domain() {
        let err = parse_address("user@").expect_err("must fail");
        assert_eq!(err, AddressError::EmptyDomain("user@".into()));
    }

    #[test]
    fn rejects_whitespace_domain() {
        assert!(matches!(
            parse_address("user@   "),
            Err(AddressError::EmptyDomain(_))
        ));
    }
}
