//! Mock crypto-artifact provider
//!
//! Every randomized stand-in value the session hands out (wallet
//! addresses, transaction hashes, attestation signatures) comes through
//! the [`ArtifactProvider`] trait. A real wallet or signer integration
//! replaces the implementation without touching any call site. The stock
//! [`MockProvider`] has zero cryptographic validity: it is random hex and
//! nothing more.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Hex length of a mock wallet address (without the `0x` prefix).
pub const ADDRESS_HEX_LEN: usize = 40;

/// Hex length of a mock transaction hash.
pub const TX_HASH_HEX_LEN: usize = 64;

/// Hex length of a mock attestation signature.
pub const SIGNATURE_HEX_LEN: usize = 130;

/// Source of the session's crypto-shaped artifacts.
pub trait ArtifactProvider {
    /// A `0x`-prefixed 40-hex-char account address.
    fn wallet_address(&mut self) -> String;

    /// A `0x`-prefixed 64-hex-char transaction hash.
    fn transaction_hash(&mut self) -> String;

    /// A `0x`-prefixed 130-hex-char signature stand-in.
    fn attestation_signature(&mut self) -> String;
}

/// Random-hex provider. Not cryptography.
pub struct MockProvider {
    rng: StdRng,
}

impl MockProvider {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic provider for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn hex(&mut self, len: usize) -> String {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut out = String::with_capacity(len + 2);
        out.push_str("0x");
        for _ in 0..len {
            out.push(DIGITS[self.rng.gen_range(0..16)] as char);
        }
        out
    }
}

impl ArtifactProvider for MockProvider {
    fn wallet_address(&mut self) -> String {
        self.hex(ADDRESS_HEX_LEN)
    }

    fn transaction_hash(&mut self) -> String {
        self.hex(TX_HASH_HEX_LEN)
    }

    fn attestation_signature(&mut self) -> String {
        self.hex(SIGNATURE_HEX_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hex_artifact(artifact: &str, hex_len: usize) {
        assert!(artifact.starts_with("0x"));
        assert_eq!(artifact.len(), hex_len + 2);
        assert!(artifact[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_artifact_shapes() {
        let mut provider = MockProvider::seeded(7);
        assert_hex_artifact(&provider.wallet_address(), ADDRESS_HEX_LEN);
        assert_hex_artifact(&provider.transaction_hash(), TX_HASH_HEX_LEN);
        assert_hex_artifact(&provider.attestation_signature(), SIGNATURE_HEX_LEN);
    }

    #[test]
    fn test_seeded_provider_is_deterministic() {
        let mut a = MockProvider::seeded(42);
        let mut b = MockProvider::seeded(42);
        assert_eq!(a.wallet_address(), b.wallet_address());
        assert_eq!(a.attestation_signature(), b.attestation_signature());
    }

    #[test]
    fn test_successive_artifacts_differ() {
        let mut provider = MockProvider::seeded(42);
        assert_ne!(provider.transaction_hash(), provider.transaction_hash());
    }
}
