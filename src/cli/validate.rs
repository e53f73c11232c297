// Passfile — CLI input validation
//
// The CLI guarantees these constraints before touching the repository; the
// store does not re-validate.

use crate::error::PassfileError;
use crate::store::USERNAME_SIZE;

/// Maximum username length: the record's field width minus NUL padding.
pub const USERNAME_MAX: usize = USERNAME_SIZE - 1;

/// Maximum password length.
pub const PASSWORD_MAX: usize = 8;

/// A valid username is 1-10 ASCII alphanumeric characters.
pub fn username(input: &str) -> Result<(), PassfileError> {
    if input.is_empty()
        || input.len() > USERNAME_MAX
        || !input.bytes().all(|b| b.is_ascii_alphanumeric())
    {
        return Err(PassfileError::InvalidInput(format!(
            "username must be 1-{} alphanumeric characters (A-Za-z0-9)",
            USERNAME_MAX
        )));
    }
    Ok(())
}

/// A valid password is 1-8 ASCII alphanumeric characters. The error message
/// never echoes the rejected value.
pub fn password(input: &str) -> Result<(), PassfileError> {
    if input.is_empty()
        || input.len() > PASSWORD_MAX
        || !input.bytes().all(|b| b.is_ascii_alphanumeric())
    {
        return Err(PassfileError::InvalidInput(format!(
            "password must be 1-{} alphanumeric characters (A-Za-z0-9)",
            PASSWORD_MAX
        )));
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_documented_shapes() {
        assert!(username("alice").is_ok());
        assert!(username("A1").is_ok());
        assert!(username("abcdefghij").is_ok(), "10 characters is the limit");
    }

    #[test]
    fn test_username_rejects_bad_shapes() {
        assert!(username("").is_err());
        assert!(username("abcdefghijk").is_err(), "11 characters is too long");
        assert!(username("al ice").is_err());
        assert!(username("al-ice").is_err());
        assert!(username("älice").is_err());
    }

    #[test]
    fn test_password_accepts_documented_shapes() {
        assert!(password("s3cr3t").is_ok());
        assert!(password("x").is_ok());
        assert!(password("12345678").is_ok(), "8 characters is the limit");
    }

    #[test]
    fn test_password_rejects_bad_shapes() {
        assert!(password("").is_err());
        assert!(password("123456789").is_err(), "9 characters is too long");
        assert!(password("pass word").is_err());
    }

    #[test]
    fn test_rejected_password_is_not_echoed() {
        let err = password("t0psecret").unwrap_err();
        assert!(!err.to_string().contains("t0psecret"));
    }
}
