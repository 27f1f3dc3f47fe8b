//! Password-reset tokens
//!
//! The raw token travels in the reset email; only its SHA-256 hex digest is
//! stored on the account.

use rand::RngCore;
use sha2::{Digest, Sha256};

const TOKEN_BYTES: usize = 32;

#[derive(Debug, Clone)]
pub struct ResetToken {
    pub raw: String,
    pub hash: String,
}

impl ResetToken {
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        let raw = hex::encode(bytes);
        let hash = Self::hash_of(&raw);
        Self { raw, hash }
    }

    /// Digest of a presented raw token, for lookup against the stored hash.
    pub fn hash_of(raw: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_matches_raw() {
        let token = ResetToken::generate();
        assert_eq!(token.raw.len(), TOKEN_BYTES * 2);
        assert_eq!(ResetToken::hash_of(&token.raw), token.hash);
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = ResetToken::generate();
        let b = ResetToken::generate();
        assert_ne!(a.raw, b.raw);
        assert_ne!(a.hash, b.hash);
    }
}
