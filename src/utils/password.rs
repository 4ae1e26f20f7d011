use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password with a fresh random salt. Output is a PHC
/// string, self-describing enough for `verify` with no extra metadata.
pub fn hash(plaintext: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plaintext.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext candidate against a stored hash. A hash that does not
/// parse counts as a mismatch rather than an error, so callers only ever
/// branch on a bool.
pub fn verify(plaintext: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hashed = hash("hunter2").unwrap();
        assert!(verify("hunter2", &hashed));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hashed = hash("hunter2").unwrap();
        assert!(!verify("hunter3", &hashed));
    }

    #[test]
    fn malformed_hash_is_a_mismatch_not_an_error() {
        assert!(!verify("hunter2", "not-a-phc-string"));
        assert!(!verify("hunter2", ""));
    }

    #[test]
    fn empty_password_is_hashable() {
        let hashed = hash("").unwrap();
        assert!(verify("", &hashed));
        assert!(!verify("x", &hashed));
    }

    #[test]
    fn same_password_hashes_differently() {
        // Random salt: two hashes of the same input must differ.
        let a = hash("hunter2").unwrap();
        let b = hash("hunter2").unwrap();
        assert_ne!(a, b);
    }
}
