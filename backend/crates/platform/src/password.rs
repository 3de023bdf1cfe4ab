//! Password Hashing and Verification
//!
//! Password handling for the credential subsystem:
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Zeroization of sensitive data
//! - Constant-time verification
//! - Strength policy with deterministic rule precedence

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum password length for the strength policy
pub const MIN_PASSWORD_LENGTH: usize = 8;

// ============================================================================
// Error Types
// ============================================================================

/// Strength policy violations, in rule-precedence order.
///
/// The order of the checks is part of the contract: a password violating
/// several rules reports the first one (length, lowercase, uppercase, digit)
/// so clients always see a deterministic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Shorter than [`MIN_PASSWORD_LENGTH`] characters
    #[error("Password must be at least 8 characters long")]
    TooShort,

    /// No ASCII lowercase letter
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    /// No ASCII uppercase letter
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    /// No ASCII digit
    #[error("Password must contain at least one number")]
    MissingDigit,
}

/// Password hashing/verification errors.
///
/// `InvalidHashFormat` signals a corrupted stored hash, which is a
/// data-integrity condition, never a plain wrong-password result.
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Strength policy
// ============================================================================

/// Check a plaintext password against the strength policy.
///
/// Rules are evaluated in a fixed order and the first violation wins:
/// 1. at least [`MIN_PASSWORD_LENGTH`] characters
/// 2. at least one lowercase letter
/// 3. at least one uppercase letter
/// 4. at least one digit
pub fn check_strength(password: &str) -> Result<(), PasswordPolicyError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort);
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordPolicyError::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordPolicyError::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordPolicyError::MissingDigit);
    }

    Ok(())
}

// ============================================================================
// Raw Password (Zeroized on drop)
// ============================================================================

/// Plaintext password with automatic memory zeroization.
///
/// Unicode is normalized with NFKC so the same password always hashes and
/// verifies identically regardless of input composition.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RawPassword(String);

impl RawPassword {
    /// Wrap a plaintext password, applying NFKC normalization.
    ///
    /// No strength policy is applied here: stored credentials predating a
    /// policy change must still verify at login. Registration runs
    /// [`check_strength`] separately before hashing.
    pub fn new(raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        Self(normalized)
    }

    /// Password bytes for hashing.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password with Argon2id.
    ///
    /// Uses the argon2 crate defaults (Argon2id v19, m=19456 KiB, t=2, p=1,
    /// the OWASP-recommended work factor) and a random 128-bit salt.
    /// Never fails for well-formed input.
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format.
///
/// The PHC string carries the algorithm, version, parameters, salt and
/// digest, so verification needs no extra state.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a PHC string (e.g. loaded from the database).
    ///
    /// A stored value that does not parse is corrupted credential data and
    /// surfaces as [`PasswordHashError::InvalidHashFormat`].
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage.
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash.
    ///
    /// Returns `false` for any mismatch. The comparison is constant-time
    /// inside the argon2 crate.
    pub fn verify(&self, password: &RawPassword) -> bool {
        // Both constructors validate the PHC string, so this re-parse
        // cannot fail; a corrupted stored value is rejected as
        // `InvalidHashFormat` at the load boundary instead.
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => {
                debug_assert!(false, "constructed HashedPassword failed to re-parse");
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_too_short() {
        // length rule fires even though case and digit rules also pass
        let err = check_strength("short1A").unwrap_err();
        assert_eq!(err, PasswordPolicyError::TooShort);
        assert_eq!(err.to_string(), "Password must be at least 8 characters long");
    }

    #[test]
    fn test_strength_missing_uppercase() {
        // has a digit, but the uppercase rule is checked before the digit rule
        let err = check_strength("alllowercase1").unwrap_err();
        assert_eq!(err, PasswordPolicyError::MissingUppercase);
        assert_eq!(
            err.to_string(),
            "Password must contain at least one uppercase letter"
        );
    }

    #[test]
    fn test_strength_missing_lowercase() {
        let err = check_strength("ALLUPPER11").unwrap_err();
        assert_eq!(err, PasswordPolicyError::MissingLowercase);
        assert_eq!(
            err.to_string(),
            "Password must contain at least one lowercase letter"
        );
    }

    #[test]
    fn test_strength_missing_digit() {
        let err = check_strength("NoDigitsHere").unwrap_err();
        assert_eq!(err, PasswordPolicyError::MissingDigit);
        assert_eq!(err.to_string(), "Password must contain at least one number");
    }

    #[test]
    fn test_strength_precedence_order() {
        // length beats every other rule
        assert_eq!(check_strength("A1").unwrap_err(), PasswordPolicyError::TooShort);
        // lowercase beats uppercase and digit
        assert_eq!(
            check_strength("!!!!!!!!").unwrap_err(),
            PasswordPolicyError::MissingLowercase
        );
    }

    #[test]
    fn test_strength_valid() {
        assert!(check_strength("Valid123pass").is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = RawPassword::new("TestPassword123!".to_string());
        let hashed = password.hash().unwrap();

        // Correct password should verify
        assert!(hashed.verify(&password));

        // Wrong password should not verify
        let wrong_password = RawPassword::new("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong_password));
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = RawPassword::new("TestPassword123!".to_string());
        let a = password.hash().unwrap();
        let b = password.hash().unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
    }

    #[test]
    fn test_unicode_normalization() {
        // "é" composed vs decomposed must verify as the same password
        let composed = RawPassword::new("Pass\u{00e9}word1".to_string());
        let decomposed = RawPassword::new("Passe\u{0301}word1".to_string());

        let hashed = composed.hash().unwrap();
        assert!(hashed.verify(&decomposed));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = RawPassword::new("TestPassword123!".to_string());
        let hashed = password.hash().unwrap();

        let phc_string = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc_string).unwrap();

        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(matches!(result, Err(PasswordHashError::InvalidHashFormat)));
    }

    #[test]
    fn test_debug_redaction() {
        let password = RawPassword::new("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
