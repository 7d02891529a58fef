//! Attestation request catalog
//!
//! Canned EIP-712-shaped approval requests awaiting a mock signature.
//! The typed-domain structure is kept for payload inspection; none of it
//! is ever hashed or verified.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// The three stages of the mock signing sequence, logged one per step.
pub const SIGN_STEPS: [&str; 3] = [
    "Hashing EIP-712 Payload...",
    "Communicating with Secure Enclave...",
    "Finalizing ECDSA Signature...",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eip712Domain {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub verifying_contract: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttestationRequest {
    pub id: String,
    pub kind: String,
    pub target: String,
    pub amount: f64,
    pub domain: Eip712Domain,
    pub payload: serde_json::Value,
}

impl AttestationRequest {
    /// Pretty-printed typed message body, for payload inspection.
    pub fn inspect_payload(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| "{}".to_string())
    }
}

/// The requests pending signature at session start.
pub fn pending_requests() -> Vec<AttestationRequest> {
    vec![
        AttestationRequest {
            id: "AUTH-1209".to_string(),
            kind: "Settlement".to_string(),
            target: "Central Bank Hub".to_string(),
            amount: 500_000.0,
            domain: Eip712Domain {
                name: "SOVR Settlement Hub".to_string(),
                version: "2.4.1".to_string(),
                chain_id: 1,
                verifying_contract: "0x472f6023C912C00000000000000000000000912c".to_string(),
            },
            payload: json!({
                "nonce": 4321,
                "expiry": 1716584400u64,
                "recipient": "0x9928527a...f21b",
                "asset": "usdSOVR",
                "amount": "500000000000",
            }),
        },
        AttestationRequest {
            id: "AUTH-1210".to_string(),
            kind: "Reserve Sync".to_string(),
            target: "Institutional Vault A".to_string(),
            amount: 0.0,
            domain: Eip712Domain {
                name: "SOVR Reserve Manager".to_string(),
                version: "2.4.0".to_string(),
                chain_id: 1,
                verifying_contract: "0x883a6023C912C00000000000000000000000882d".to_string(),
            },
            payload: json!({
                "merkleRoot": "0x772b9a2c...cc12",
                "vaultId": 1,
                "timestamp": 1716552000u64,
                "consensusHeight": 19432105u64,
            }),
        },
    ]
}

/// Find a pending request by id.
pub fn find_request(id: &str) -> Option<AttestationRequest> {
    pending_requests().into_iter().find(|req| req.id == id)
}
