//! Book manifest describing the pages the viewer renders.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{NoteRegion, PageId};

const DEFAULT_NOTE: &str = "Add your notes here...";

/// One page of the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    /// Identifier used as the notes storage key
    pub id: PageId,
    /// Page heading
    pub title: String,
    /// Page body text
    #[serde(default)]
    pub body: String,
    /// Initial note content shown before anything is saved
    #[serde(default = "default_note")]
    pub note: String,
}

/// The full book: a title and its ordered pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookManifest {
    pub title: String,
    pub pages: Vec<PageSpec>,
}

impl BookManifest {
    /// Build the initial read-only note regions for every page
    #[must_use]
    pub fn note_regions(&self) -> Vec<NoteRegion> {
        self.pages
            .iter()
            .map(|page| NoteRegion::new(page.id.clone(), page.note.clone()))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(Error::InvalidConfig(
                "book must contain at least one page".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if page.id.as_str().trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "page id must not be empty".to_string(),
                ));
            }
            if !seen.insert(page.id.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate page id '{}'",
                    page.id
                )));
            }
        }

        Ok(())
    }
}

/// Parse and validate a book manifest from a raw JSON payload.
pub fn parse_book_manifest(payload: &str) -> Result<BookManifest> {
    let manifest: BookManifest = serde_json::from_str(payload)?;
    manifest.validate()?;
    Ok(manifest)
}

/// The book bundled with the app.
#[must_use]
pub fn default_book() -> BookManifest {
    let pages = [
        ("1", "Bulbasaur", "Grass / Poison. A strange seed was planted on its back at birth."),
        ("2", "Charmander", "Fire. The flame at the tip of its tail shows its life force."),
        ("3", "Squirtle", "Water. It shelters itself in its shell and sprays foam."),
        ("4", "Pikachu", "Electric. It stores electricity in the pouches on its cheeks."),
        ("5", "Eevee", "Normal. Its unstable genes let it evolve in many ways."),
        ("6", "Snorlax", "Normal. It is not satisfied unless it eats a ton of food a day."),
    ];

    BookManifest {
        title: "Field Journal".to_string(),
        pages: pages
            .into_iter()
            .map(|(id, title, body)| PageSpec {
                id: PageId::from(id),
                title: title.to_string(),
                body: body.to_string(),
                note: default_note(),
            })
            .collect(),
    }
}

fn default_note() -> String {
    DEFAULT_NOTE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_book_is_valid() {
        let book = default_book();
        assert!(book.validate().is_ok());
        assert_eq!(book.pages.len(), 6);
    }

    #[test]
    fn parses_manifest_with_default_note() {
        let book = parse_book_manifest(
            r#"{"title":"Trip","pages":[{"id":"a","title":"Day one","body":"Rain."}]}"#,
        )
        .unwrap();
        assert_eq!(book.pages[0].note, DEFAULT_NOTE);
        assert_eq!(
            book.note_regions(),
            vec![NoteRegion::new("a", DEFAULT_NOTE)]
        );
    }

    #[test]
    fn rejects_duplicate_page_ids() {
        let result = parse_book_manifest(
            r#"{"title":"T","pages":[{"id":"1","title":"A"},{"id":"1","title":"B"}]}"#,
        );
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_books_and_unknown_fields() {
        assert!(parse_book_manifest(r#"{"title":"T","pages":[]}"#).is_err());
        assert!(parse_book_manifest(r#"{"title":"T","pages":[],"extra":1}"#).is_err());
        assert!(parse_book_manifest(r#"{"title":"T","pages":[{"id":" ","title":"A"}]}"#).is_err());
    }
}
