use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use std::sync::OnceLock;

static DECOY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Hashes with argon2id and a fresh random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow!("password hashing failed: {}", err))?;

    Ok(hash.to_string())
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|err| anyhow!("stored password hash is malformed: {}", err))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Spends one argon2 verification against a fixed decoy hash and always answers `false`.
/// Used when the account does not exist so the miss costs as much as a wrong password.
pub fn verify_decoy(password: &str) -> bool {
    let decoy = DECOY_HASH.get_or_init(|| hash_password("decoy-account-password").ok());
    if let Some(hash) = decoy {
        let _ = verify_password(password, hash);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoy_never_verifies() {
        assert!(!verify_decoy("decoy-account-password"));
        assert!(!verify_decoy("anything"));
        assert!(DECOY_HASH.get().is_some_and(|hash| hash.is_some()));
    }

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hash = hash_password("password").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("password", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_different_salts() {
        let first = hash_password("password").unwrap();
        let second = hash_password("password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("password", "password").is_err());
    }
}
