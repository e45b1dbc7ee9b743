//! Desktop bootstrap configuration loaded from build-time generated JSON.

use std::fs;

use folio_core::config::{default_book, parse_book_manifest, BookManifest, ViewerConfig};
use folio_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the embedded book path at runtime.
const BOOK_PATH_ENV: &str = "FOLIO_BOOK_PATH";

/// Build-provisioned configuration embedded into desktop binaries.
///
/// The secret ends up in the binary in cleartext. It only keeps casual
/// visitors from editing notes and must never guard anything sensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesktopBootstrapConfig {
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub secret_kind: Option<String>,
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default)]
    pub book_path: Option<String>,
}

/// Loads the generated desktop bootstrap JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns a default empty config so
/// the app still starts with the built-in secret and book.
pub fn load_bootstrap_config() -> DesktopBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/desktop-bootstrap.json"));
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse desktop bootstrap config: {}", error);
        DesktopBootstrapConfig::default()
    })
}

impl DesktopBootstrapConfig {
    /// Resolve the notes gate settings, falling back to defaults when invalid.
    pub fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig::from_overrides(
            self.secret.clone(),
            self.secret_kind.clone(),
            self.storage_key.clone(),
        )
        .unwrap_or_else(|error| {
            tracing::warn!("Invalid viewer config, using defaults: {}", error);
            ViewerConfig::default()
        })
    }

    /// Book path from the runtime environment, else the embedded one.
    pub fn resolved_book_path(&self, runtime_override: Option<String>) -> Option<String> {
        normalize_text_option(runtime_override)
            .or_else(|| normalize_text_option(self.book_path.clone()))
    }

    /// Load the book to display, falling back to the bundled book.
    pub fn load_book(&self) -> BookManifest {
        let Some(path) = self.resolved_book_path(std::env::var(BOOK_PATH_ENV).ok()) else {
            return default_book();
        };

        let manifest = fs::read_to_string(&path)
            .map_err(folio_core::Error::from)
            .and_then(|raw| parse_book_manifest(&raw));
        match manifest {
            Ok(book) => {
                tracing::info!("Loaded book '{}' from {}", book.title, path);
                book
            }
            Err(error) => {
                tracing::warn!("Failed to load book from {}: {}", path, error);
                default_book()
            }
        }
    }
}
