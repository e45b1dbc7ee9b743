//! Viewer configuration.
//!
//! Provides `ViewerConfig`, the build-provisioned settings for the notes
//! gate and storage, plus the book manifest the viewer renders.

mod book;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::normalize_text_option;

pub use book::{default_book, parse_book_manifest, BookManifest, PageSpec};

/// PIN length used when none is configured.
pub const DEFAULT_PIN_LENGTH: usize = 6;
/// Secret shipped with the default build.
pub const DEFAULT_SECRET: &str = "919393";
/// Local storage key holding the serialized notes store.
pub const DEFAULT_STORAGE_KEY: &str = "pokemonNotes";

/// How the unlock secret is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SecretKind {
    /// Fixed-length digit sequence entered one digit per box
    Pin {
        #[serde(default = "default_pin_length")]
        length: usize,
    },
    /// Free-form password
    Password,
}

impl Default for SecretKind {
    fn default() -> Self {
        Self::Pin {
            length: DEFAULT_PIN_LENGTH,
        }
    }
}

impl SecretKind {
    /// Parse the short form used in environment variables (`pin`, `pin:4`, `password`).
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim().to_ascii_lowercase();
        match raw.as_str() {
            "pin" => Ok(Self::default()),
            "password" => Ok(Self::Password),
            other => {
                let length = other
                    .strip_prefix("pin:")
                    .and_then(|length| length.parse::<usize>().ok())
                    .filter(|length| *length > 0)
                    .ok_or_else(|| Error::InvalidConfig(format!("unknown secret kind '{raw}'")))?;
                Ok(Self::Pin { length })
            }
        }
    }

    /// Human-readable noun for error messages
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Pin { .. } => "PIN",
            Self::Password => "password",
        }
    }
}

const fn default_pin_length() -> usize {
    DEFAULT_PIN_LENGTH
}

/// Settings for the notes gate and its storage.
///
/// The secret is delivered with the client in cleartext. It keeps casual
/// visitors from editing notes; it does not protect anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Secret that unlocks note editing
    pub secret: String,
    /// How the secret is entered
    #[serde(default)]
    pub secret_kind: SecretKind,
    /// Storage key for the notes blob
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            secret_kind: SecretKind::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl ViewerConfig {
    /// Build a config from optional overrides, keeping defaults for missing values.
    pub fn from_overrides(
        secret: Option<String>,
        secret_kind: Option<String>,
        storage_key: Option<String>,
    ) -> Result<Self> {
        let defaults = Self::default();
        let secret_kind = match normalize_text_option(secret_kind) {
            Some(raw) => SecretKind::parse(&raw)?,
            None => defaults.secret_kind,
        };
        let config = Self {
            secret: normalize_text_option(secret).unwrap_or(defaults.secret),
            secret_kind,
            storage_key: normalize_text_option(storage_key).unwrap_or(defaults.storage_key),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the secret can actually be entered with the configured kind.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "storage key must not be empty".to_string(),
            ));
        }

        match self.secret_kind {
            SecretKind::Pin { length } => {
                if length == 0 {
                    return Err(Error::InvalidConfig(
                        "PIN length must be at least 1".to_string(),
                    ));
                }
                let digits = self.secret.chars().filter(char::is_ascii_digit).count();
                if digits != self.secret.chars().count() || digits != length {
                    return Err(Error::InvalidConfig(format!(
                        "PIN secret must be exactly {length} digits"
                    )));
                }
            }
            SecretKind::Password => {
                if self.secret.is_empty() {
                    return Err(Error::InvalidConfig(
                        "password secret must not be empty".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}
