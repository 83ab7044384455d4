//! Admin credential verification
//!
//! The curation operations are gated behind a shared secret. Verification
//! is pluggable: the expected digest comes from configuration supplied by
//! the caller, never from a constant embedded in the binary.

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Checks a presented admin secret
pub trait CredentialVerifier {
    /// Returns true when the secret matches the configured credential
    fn verify(&self, secret: &str) -> bool;
}

/// Verifier comparing SHA-256 digests of the admin password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sha256Verifier {
    expected_digest: String,
}

impl Sha256Verifier {
    /// Create a verifier from the expected password digest in hex form
    pub fn new(expected_digest: impl Into<String>) -> Result<Self> {
        let expected_digest = expected_digest.into().to_ascii_lowercase();
        if expected_digest.len() != 64 || !expected_digest.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidInput(
                "expected a 64-character hex SHA-256 digest".into(),
            ));
        }
        Ok(Self { expected_digest })
    }

    /// Hex SHA-256 digest of a secret
    #[must_use]
    pub fn digest(secret: &str) -> String {
        hex::encode(Sha256::digest(secret.as_bytes()))
    }
}

impl CredentialVerifier for Sha256Verifier {
    fn verify(&self, secret: &str) -> bool {
        Self::digest(secret) == self.expected_digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha256("admin123")
    const ADMIN123_DIGEST: &str =
        "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9";

    #[test]
    fn test_accepts_matching_password() {
        let verifier = Sha256Verifier::new(ADMIN123_DIGEST).unwrap();
        assert!(verifier.verify("admin123"));
    }

    #[test]
    fn test_rejects_wrong_password() {
        let verifier = Sha256Verifier::new(ADMIN123_DIGEST).unwrap();
        assert!(!verifier.verify("admin124"));
        assert!(!verifier.verify(""));
    }

    #[test]
    fn test_digest_case_is_insignificant() {
        let verifier = Sha256Verifier::new(ADMIN123_DIGEST.to_ascii_uppercase()).unwrap();
        assert!(verifier.verify("admin123"));
    }

    #[test]
    fn test_rejects_malformed_digest() {
        assert!(Sha256Verifier::new("not-a-digest").is_err());
        assert!(Sha256Verifier::new("abc123").is_err());
        assert!(Sha256Verifier::new("g".repeat(64)).is_err());
    }

    #[test]
    fn test_digest_round_trip() {
        let digest = Sha256Verifier::digest("hunter2");
        let verifier = Sha256Verifier::new(digest).unwrap();
        assert!(verifier.verify("hunter2"));
    }
}
