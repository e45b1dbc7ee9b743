//! folio-core - Core library for Folio
//!
//! This crate contains the notes model, the secret gate, local key-value
//! storage, and the viewer state helpers used by the Folio desktop shell.
//!
//! The secret gate is a convenience lock for casual edits. The secret ships
//! with the client and is compared in cleartext, so it is not a security
//! boundary and must not be treated as one.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod notes;
pub mod storage;
pub mod util;
pub mod viewer;

pub use error::{Error, Result};
pub use models::{NoteRegion, NotesStore, PageId, UnlockState};
pub use notes::NotesController;
