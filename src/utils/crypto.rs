//! Password hashing
//!
//! Passwords are stored as an unsalted SHA-256 hex digest. Existing records
//! and clients depend on this exact format, but it is not a credential-grade
//! scheme: identical passwords share a hash and the digest is cheap to brute
//! force. Moving to a salted KDF needs a migration of stored hashes.

use sha2::{Digest, Sha256};

/// Hash a password: SHA-256 of the UTF-8 bytes, lowercase hex
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a candidate password against a stored hash
pub fn verify_password(stored_hash: &str, candidate: &str) -> bool {
    hash_password(candidate) == stored_hash
}
