//! Secret gate for note editing.
//!
//! The gate compares user input against a secret delivered with the client.
//! It is a convenience lock, not access control: anyone holding the binary
//! can read the secret, and there is no attempt limiting or lockout.

use thiserror::Error;

use crate::config::{SecretKind, ViewerConfig};

/// Result type for secret checks
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// User-correctable secret entry errors.
///
/// The `Display` text is the inline message shown next to the input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Password variant received empty input
    #[error("Please enter a password")]
    EmptyInput,

    /// PIN variant received the wrong number of characters
    #[error("Please enter all {expected} digits")]
    WrongLength { expected: usize, actual: usize },

    /// Input did not match the secret
    #[error("Incorrect {}. Please try again.", .kind.noun())]
    SecretMismatch { kind: SecretKind },
}

/// Compares entered text against the configured secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretGate {
    secret: String,
    kind: SecretKind,
}

impl SecretGate {
    /// Create a gate for `secret` entered as `kind`
    pub fn new(secret: impl Into<String>, kind: SecretKind) -> Self {
        Self {
            secret: secret.into(),
            kind,
        }
    }

    /// Create a gate from viewer configuration
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.secret.clone(), config.secret_kind)
    }

    /// How the secret is entered
    #[must_use]
    pub const fn kind(&self) -> SecretKind {
        self.kind
    }

    /// Check `input` against the secret.
    ///
    /// Shape errors short-circuit before any comparison.
    pub fn check(&self, input: &str) -> AuthResult<()> {
        match self.kind {
            SecretKind::Pin { length } => {
                let actual = input.chars().count();
                if actual != length {
                    return Err(AuthError::WrongLength {
                        expected: length,
                        actual,
                    });
                }
            }
            SecretKind::Password => {
                if input.is_empty() {
                    return Err(AuthError::EmptyInput);
                }
            }
        }

        if input == self.secret {
            Ok(())
        } else {
            Err(AuthError::SecretMismatch { kind: self.kind })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin_gate() -> SecretGate {
        SecretGate::new("919393", SecretKind::Pin { length: 6 })
    }

    #[test]
    fn pin_gate_accepts_exact_secret() {
        assert_eq!(pin_gate().check("919393"), Ok(()));
    }

    #[test]
    fn pin_gate_reports_length_before_comparing() {
        let gate = pin_gate();
        for input in ["", "9", "91939", "9193931"] {
            assert_eq!(
                gate.check(input),
                Err(AuthError::WrongLength {
                    expected: 6,
                    actual: input.len(),
                })
            );
        }
        // A prefix of the secret is still a length error, never a match.
        assert!(matches!(
            gate.check("91939"),
            Err(AuthError::WrongLength { .. })
        ));
    }

    #[test]
    fn pin_gate_rejects_wrong_digits() {
        assert_eq!(
            pin_gate().check("123456"),
            Err(AuthError::SecretMismatch {
                kind: SecretKind::Pin { length: 6 }
            })
        );
    }

    #[test]
    fn password_gate_rejects_empty_then_mismatch() {
        let gate = SecretGate::new("open sesame", SecretKind::Password);
        assert_eq!(gate.check(""), Err(AuthError::EmptyInput));
        assert_eq!(
            gate.check("open sesame "),
            Err(AuthError::SecretMismatch {
                kind: SecretKind::Password
            })
        );
        assert_eq!(gate.check("open sesame"), Ok(()));
    }

    #[test]
    fn repeated_failures_do_not_lock_out() {
        let gate = pin_gate();
        for _ in 0..100 {
            assert!(gate.check("000000").is_err());
        }
        assert_eq!(gate.check("919393"), Ok(()));
    }

    #[test]
    fn error_messages_match_inline_text() {
        assert_eq!(
            AuthError::WrongLength {
                expected: 6,
                actual: 2
            }
            .to_string(),
            "Please enter all 6 digits"
        );
        assert_eq!(
            AuthError::SecretMismatch {
                kind: SecretKind::Pin { length: 6 }
            }
            .to_string(),
            "Incorrect PIN. Please try again."
        );
        assert_eq!(
            AuthError::SecretMismatch {
                kind: SecretKind::Password
            }
            .to_string(),
            "Incorrect password. Please try again."
        );
        assert_eq!(AuthError::EmptyInput.to_string(), "Please enter a password");
    }
}
