//! Salted password encoding for the users sheet.
//!
//! Stored form: `sha256$<salt_hex>$<digest_hex>`. The raw secret never
//! reaches the store; verification recomputes the digest from the stored
//! salt. Anything that fails to parse verifies as false.

use rand::RngCore;
use sha2::{Digest, Sha256};

const SCHEME: &str = "sha256";
const SALT_BYTES: usize = 16;

/// Encode a password with a fresh random salt.
pub fn encode_password(password: &str) -> String {
    let mut salt = [0u8; SALT_BYTES];
    rand::rng().fill_bytes(&mut salt);

    let digest = salted_digest(&salt, password);
    format!("{}${}${}", SCHEME, hex::encode(salt), hex::encode(digest))
}

/// Check a password against a stored encoding.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    let (Some(scheme), Some(salt_hex), Some(digest_hex)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if scheme != SCHEME {
        return false;
    }

    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(digest_hex) else {
        return false;
    };

    salted_digest(&salt, password) == expected
}

fn salted_digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}
