//! Notes unlock and persistence controller.
//!
//! `NotesController` owns the lock state, the note regions, the saved notes
//! store, and the secret prompt. The view renders from it and routes every
//! trigger, keystroke, and edit back into it.

mod pin_entry;
mod prompt;

use crate::auth::{AuthResult, SecretGate};
use crate::config::{BookManifest, ViewerConfig};
use crate::error::{Error, Result};
use crate::models::{NoteRegion, NotesStore, PageId, UnlockState};
use crate::storage::KeyValueStore;

pub use pin_entry::PinEntry;
pub use prompt::{SecretEntry, UnlockPrompt};

/// Label of the trigger button while notes are locked
pub const UNLOCK_LABEL: &str = "Unlock Notes";
/// Label of the trigger button while notes are editable
pub const SAVE_LABEL: &str = "Save Notes";

/// Result of reading the saved notes at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing saved yet
    Missing,
    /// Saved data could not be read or parsed; treated as an empty store
    Unreadable,
    /// Saved notes were applied to `applied` regions
    Loaded { applied: usize },
}

/// Result of a save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Notes were not unlocked, nothing was written
    NotUnlocked,
    /// All `pages` regions were written and locked again
    Saved { pages: usize },
}

/// What the trigger button did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The secret prompt was opened
    PromptOpened,
    /// Notes were saved and locked
    Saved(SaveOutcome),
}

/// Controller for the lockable page notes.
pub struct NotesController<S> {
    gate: SecretGate,
    storage: S,
    storage_key: String,
    store: NotesStore,
    state: UnlockState,
    regions: Vec<NoteRegion>,
    prompt: UnlockPrompt,
}

impl<S: KeyValueStore> NotesController<S> {
    /// Create a locked controller over `regions`
    pub fn new(config: &ViewerConfig, regions: Vec<NoteRegion>, storage: S) -> Self {
        let regions = regions
            .into_iter()
            .map(|region| NoteRegion {
                editable: false,
                ..region
            })
            .collect();

        Self {
            gate: SecretGate::from_config(config),
            storage,
            storage_key: config.storage_key.clone(),
            store: NotesStore::new(),
            state: UnlockState::Locked,
            regions,
            prompt: UnlockPrompt::new(config.secret_kind),
        }
    }

    /// Create a locked controller with one region per book page
    pub fn for_book(config: &ViewerConfig, book: &BookManifest, storage: S) -> Self {
        Self::new(config, book.note_regions(), storage)
    }

    /// Current lock state
    pub const fn state(&self) -> UnlockState {
        self.state
    }

    /// All note regions in page order
    pub fn regions(&self) -> &[NoteRegion] {
        &self.regions
    }

    /// Region for a page
    pub fn region(&self, page: &PageId) -> Option<&NoteRegion> {
        self.regions.iter().find(|region| &region.page == page)
    }

    /// Notes as last loaded or saved
    pub const fn store(&self) -> &NotesStore {
        &self.store
    }

    /// Secret prompt state
    pub const fn prompt(&self) -> &UnlockPrompt {
        &self.prompt
    }

    /// Mutable secret prompt state, for routing keystrokes
    pub fn prompt_mut(&mut self) -> &mut UnlockPrompt {
        &mut self.prompt
    }

    /// Backing storage
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Label for the trigger button in the current state
    pub const fn trigger_label(&self) -> &'static str {
        match self.state {
            UnlockState::Locked => UNLOCK_LABEL,
            UnlockState::Unlocked => SAVE_LABEL,
        }
    }

    /// Run the trigger button's action for the current state
    pub fn trigger(&mut self) -> Result<TriggerOutcome> {
        match self.state {
            UnlockState::Locked => {
                self.request_unlock();
                Ok(TriggerOutcome::PromptOpened)
            }
            UnlockState::Unlocked => self.save_notes().map(TriggerOutcome::Saved),
        }
    }

    /// Show the secret prompt with a cleared input
    pub fn request_unlock(&mut self) {
        tracing::debug!("Showing unlock prompt");
        self.prompt.open();
    }

    /// Close the prompt without attempting to unlock
    pub fn dismiss_prompt(&mut self) {
        if self.prompt.is_visible() {
            tracing::debug!("Unlock prompt dismissed");
        }
        self.prompt.close();
    }

    /// Validate whatever the prompt currently holds
    pub fn submit_prompt(&mut self) -> AuthResult<()> {
        let input = self.prompt.entry().value();
        self.validate_secret(&input)
    }

    /// Check `input` against the secret and unlock on a match.
    ///
    /// On failure the prompt shows the error and stays open; there is no
    /// limit on further attempts.
    pub fn validate_secret(&mut self, input: &str) -> AuthResult<()> {
        if let Err(error) = self.gate.check(input) {
            tracing::debug!("Unlock attempt rejected: {:?}", error);
            self.prompt.fail(error);
            return Err(error);
        }

        for region in &mut self.regions {
            region.editable = true;
        }
        self.prompt.close();
        self.state = UnlockState::Unlocked;
        tracing::info!("Notes unlocked for editing");
        Ok(())
    }

    /// Replace the content of a page's region while unlocked
    pub fn edit_region(&mut self, page: &PageId, content: impl Into<String>) -> Result<()> {
        if !self.state.is_unlocked() {
            return Err(Error::NotesLocked);
        }

        let region = self
            .regions
            .iter_mut()
            .find(|region| &region.page == page)
            .ok_or_else(|| Error::UnknownPage(page.clone()))?;
        region.content = content.into();
        Ok(())
    }

    /// Write every region's content to storage and lock the notes.
    ///
    /// The whole store is serialized and replaces the stored value. If the
    /// write fails the notes stay unlocked so the save can be retried.
    pub fn save_notes(&mut self) -> Result<SaveOutcome> {
        if !self.state.is_unlocked() {
            return Ok(SaveOutcome::NotUnlocked);
        }

        let mut store = self.store.clone();
        for region in &self.regions {
            store.insert(region.page.clone(), region.content.clone());
        }

        let serialized = store.to_json()?;
        self.storage.set(&self.storage_key, &serialized)?;
        self.store = store;

        for region in &mut self.regions {
            region.editable = false;
        }
        self.state = UnlockState::Locked;

        let pages = self.regions.len();
        tracing::info!("Saved notes for {} pages", pages);
        Ok(SaveOutcome::Saved { pages })
    }

    /// Apply saved notes from storage to matching regions.
    ///
    /// Missing or unreadable data leaves the regions untouched and the
    /// store empty.
    pub fn load_notes(&mut self) -> LoadOutcome {
        let raw = match self.storage.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No saved notes under '{}'", self.storage_key);
                self.store = NotesStore::new();
                return LoadOutcome::Missing;
            }
            Err(error) => {
                tracing::warn!("Failed to read saved notes: {}", error);
                self.store = NotesStore::new();
                return LoadOutcome::Unreadable;
            }
        };

        let store = match NotesStore::from_json(&raw) {
            Ok(store) => store,
            Err(error) => {
                tracing::warn!("Ignoring corrupt saved notes: {}", error);
                self.store = NotesStore::new();
                return LoadOutcome::Unreadable;
            }
        };

        let mut applied = 0;
        for region in &mut self.regions {
            if let Some(content) = store.get(&region.page) {
                region.content = content.to_string();
                applied += 1;
            }
        }
        self.store = store;

        tracing::info!("Loaded saved notes for {} pages", applied);
        LoadOutcome::Loaded { applied }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthError;
    use crate::config::SecretKind;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    const KEY: &str = "pokemonNotes";

    fn regions() -> Vec<NoteRegion> {
        vec![
            NoteRegion::new("1", "Add your notes here..."),
            NoteRegion::new("2", "Add your notes here..."),
            NoteRegion::new("3", "Add your notes here..."),
        ]
    }

    fn controller(storage: MemoryStore) -> NotesController<MemoryStore> {
        NotesController::new(&ViewerConfig::default(), regions(), storage)
    }

    fn assert_all_editable(controller: &NotesController<MemoryStore>, editable: bool) {
        assert!(controller
            .regions()
            .iter()
            .all(|region| region.editable == editable));
    }

    fn unlocked() -> NotesController<MemoryStore> {
        let mut controller = controller(MemoryStore::new());
        controller.request_unlock();
        controller.validate_secret("919393").unwrap();
        controller
    }

    #[test]
    fn starts_locked_with_read_only_regions() {
        let mut editable = regions();
        editable[0].editable = true;
        let controller =
            NotesController::new(&ViewerConfig::default(), editable, MemoryStore::new());

        assert_eq!(controller.state(), UnlockState::Locked);
        assert_eq!(controller.trigger_label(), UNLOCK_LABEL);
        assert_all_editable(&controller, false);
        assert!(!controller.prompt().is_visible());
    }

    #[test]
    fn trigger_while_locked_opens_cleared_prompt() {
        let mut controller = controller(MemoryStore::new());
        controller.validate_secret("000000").unwrap_err();
        let focus_before = controller.prompt().focus_generation();

        assert_eq!(controller.trigger().unwrap(), TriggerOutcome::PromptOpened);
        assert!(controller.prompt().is_visible());
        assert_eq!(controller.prompt().error(), None);
        assert_eq!(controller.prompt().entry().value(), "");
        assert!(controller.prompt().focus_generation() > focus_before);
    }

    #[test]
    fn wrong_secrets_never_unlock() {
        let mut controller = controller(MemoryStore::new());
        controller.request_unlock();

        for input in ["", "1", "91939", "919394", "9193930", "abcdef", "919393 "] {
            assert!(controller.validate_secret(input).is_err());
            assert_eq!(controller.state(), UnlockState::Locked);
            assert_all_editable(&controller, false);
            assert!(controller.prompt().is_visible());
        }
    }

    #[test]
    fn short_pin_reports_length_error() {
        let mut controller = controller(MemoryStore::new());
        controller.request_unlock();

        let error = controller.validate_secret("9193").unwrap_err();
        assert_eq!(
            error,
            AuthError::WrongLength {
                expected: 6,
                actual: 4
            }
        );
        assert_eq!(
            controller.prompt().error_message(),
            "Please enter all 6 digits"
        );
    }

    #[test]
    fn mismatch_surfaces_error_and_clears_prompt() {
        let mut controller = controller(MemoryStore::new());
        controller.request_unlock();
        if let SecretEntry::Pin(entry) = controller.prompt_mut().entry_mut() {
            for (index, digit) in "123456".chars().enumerate() {
                entry.input(index, &digit.to_string());
            }
        }

        assert!(controller.submit_prompt().is_err());
        assert_eq!(
            controller.prompt().error_message(),
            "Incorrect PIN. Please try again."
        );
        assert_eq!(controller.prompt().entry().value(), "");
    }

    #[test]
    fn correct_secret_unlocks_every_region() {
        let controller = unlocked();

        assert_eq!(controller.state(), UnlockState::Unlocked);
        assert_eq!(controller.trigger_label(), SAVE_LABEL);
        assert!(!controller.prompt().is_visible());
        assert_all_editable(&controller, true);
    }

    #[test]
    fn correct_secret_after_failures_still_unlocks() {
        let mut controller = controller(MemoryStore::new());
        controller.request_unlock();
        for _ in 0..20 {
            controller.validate_secret("111111").unwrap_err();
        }
        assert!(controller.validate_secret("919393").is_ok());
        assert_eq!(controller.state(), UnlockState::Unlocked);
    }

    #[test]
    fn submit_prompt_uses_pin_entry_value() {
        let mut controller = controller(MemoryStore::new());
        controller.request_unlock();
        if let SecretEntry::Pin(entry) = controller.prompt_mut().entry_mut() {
            for (index, digit) in "919393".chars().enumerate() {
                entry.input(index, &digit.to_string());
            }
        }

        assert!(controller.submit_prompt().is_ok());
        assert_eq!(controller.state(), UnlockState::Unlocked);
    }

    #[test]
    fn password_variant_checks_free_text() {
        let config = ViewerConfig {
            secret: "pallet town".to_string(),
            secret_kind: SecretKind::Password,
            storage_key: KEY.to_string(),
        };
        let mut controller = NotesController::new(&config, regions(), MemoryStore::new());
        controller.request_unlock();

        assert_eq!(controller.validate_secret(""), Err(AuthError::EmptyInput));
        assert!(controller.validate_secret("pallet").is_err());
        assert!(controller.validate_secret("pallet town").is_ok());
    }

    #[test]
    fn dismissing_prompt_has_no_side_effects() {
        let mut controller = controller(MemoryStore::new());
        controller.request_unlock();
        controller.dismiss_prompt();

        assert!(!controller.prompt().is_visible());
        assert_eq!(controller.state(), UnlockState::Locked);
        assert_eq!(controller.storage().get(KEY).unwrap(), None);
    }

    #[test]
    fn edits_are_rejected_while_locked() {
        let mut controller = controller(MemoryStore::new());
        let result = controller.edit_region(&PageId::from("1"), "sneaky");
        assert!(matches!(result, Err(Error::NotesLocked)));
        assert_eq!(
            controller.region(&PageId::from("1")).unwrap().content,
            "Add your notes here..."
        );
    }

    #[test]
    fn edits_to_unknown_pages_are_rejected() {
        let mut controller = unlocked();
        let result = controller.edit_region(&PageId::from("99"), "nope");
        assert!(matches!(result, Err(Error::UnknownPage(page)) if page.as_str() == "99"));
    }

    #[test]
    fn trigger_while_unlocked_saves_and_locks() {
        let mut controller = unlocked();
        controller
            .edit_region(&PageId::from("2"), "<b>Ivysaur</b> at level 16")
            .unwrap();

        assert_eq!(
            controller.trigger().unwrap(),
            TriggerOutcome::Saved(SaveOutcome::Saved { pages: 3 })
        );
        assert_eq!(controller.state(), UnlockState::Locked);
        assert_eq!(controller.trigger_label(), UNLOCK_LABEL);
        assert_all_editable(&controller, false);

        let stored = controller.storage().get(KEY).unwrap().unwrap();
        let store = NotesStore::from_json(&stored).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.get(&PageId::from("2")),
            Some("<b>Ivysaur</b> at level 16")
        );
    }

    #[test]
    fn repeated_save_after_locking_is_a_noop() {
        let mut controller = unlocked();
        controller
            .edit_region(&PageId::from("1"), "Caught near Pallet Town")
            .unwrap();

        assert_eq!(controller.save_notes().unwrap(), SaveOutcome::Saved { pages: 3 });
        let stored = controller.storage().get(KEY).unwrap();

        assert_eq!(controller.save_notes().unwrap(), SaveOutcome::NotUnlocked);
        assert!(!controller.prompt().is_visible());
        assert_eq!(controller.state(), UnlockState::Locked);
        assert_eq!(controller.storage().get(KEY).unwrap(), stored);
    }

    #[test]
    fn save_while_locked_writes_nothing() {
        let mut controller = controller(MemoryStore::new());
        assert_eq!(controller.save_notes().unwrap(), SaveOutcome::NotUnlocked);
        assert_eq!(controller.storage().get(KEY).unwrap(), None);
    }

    #[test]
    fn save_replaces_prior_stored_value() {
        let mut storage = MemoryStore::new();
        storage
            .set(KEY, r#"{"1":"stale","42":"orphan"}"#)
            .unwrap();
        let mut controller = controller(storage);

        controller.request_unlock();
        controller.validate_secret("919393").unwrap();
        controller.save_notes().unwrap();

        let stored = controller.storage().get(KEY).unwrap().unwrap();
        let expected: NotesStore = regions()
            .into_iter()
            .map(|region| (region.page, region.content))
            .collect();
        assert_eq!(NotesStore::from_json(&stored).unwrap(), expected);
    }

    #[test]
    fn save_then_reload_round_trips() {
        let mut controller = unlocked();
        controller
            .edit_region(&PageId::from("1"), "<i>Seed</i> sprouted")
            .unwrap();
        controller.edit_region(&PageId::from("3"), "").unwrap();
        controller.save_notes().unwrap();
        let saved = controller.store().clone();

        let storage = MemoryStore::clone(controller.storage());
        let mut reloaded = NotesController::new(&ViewerConfig::default(), regions(), storage);
        assert_eq!(reloaded.load_notes(), LoadOutcome::Loaded { applied: 3 });

        assert_eq!(reloaded.store(), &saved);
        assert_eq!(
            reloaded.region(&PageId::from("1")).unwrap().content,
            "<i>Seed</i> sprouted"
        );
        assert_eq!(reloaded.region(&PageId::from("3")).unwrap().content, "");
        assert_eq!(reloaded.state(), UnlockState::Locked);
        assert_all_editable(&reloaded, false);
    }

    #[test]
    fn load_applies_only_matching_pages() {
        let mut storage = MemoryStore::new();
        storage.set(KEY, r#"{"2":"Thunderbolt","8":"elsewhere"}"#).unwrap();
        let mut controller = controller(storage);

        assert_eq!(controller.load_notes(), LoadOutcome::Loaded { applied: 1 });
        assert_eq!(
            controller.region(&PageId::from("1")).unwrap().content,
            "Add your notes here..."
        );
        assert_eq!(
            controller.region(&PageId::from("2")).unwrap().content,
            "Thunderbolt"
        );
        assert_eq!(controller.store().len(), 2);
    }

    #[test]
    fn load_without_saved_notes_is_noop() {
        let mut controller = controller(MemoryStore::new());
        assert_eq!(controller.load_notes(), LoadOutcome::Missing);
        assert!(controller.store().is_empty());
        assert_eq!(controller.regions(), regions().as_slice());
    }

    #[test]
    fn corrupt_saved_notes_are_treated_as_empty() {
        let mut storage = MemoryStore::new();
        storage.set(KEY, "{\"1\": \"unterminated").unwrap();
        let mut controller = controller(storage);

        assert_eq!(controller.load_notes(), LoadOutcome::Unreadable);
        assert!(controller.store().is_empty());
        assert_eq!(controller.regions(), regions().as_slice());
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage("disk unavailable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("disk full".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_keeps_notes_unlocked() {
        let mut controller =
            NotesController::new(&ViewerConfig::default(), regions(), FailingStore);
        assert_eq!(controller.load_notes(), LoadOutcome::Unreadable);

        controller.validate_secret("919393").unwrap();
        assert!(matches!(controller.save_notes(), Err(Error::Storage(_))));
        assert_eq!(controller.state(), UnlockState::Unlocked);
        assert!(controller.regions().iter().all(|region| region.editable));
    }

    #[test]
    fn failed_write_leaves_store_unchanged() {
        let mut controller =
            NotesController::new(&ViewerConfig::default(), regions(), FailingStore);
        controller.validate_secret("919393").unwrap();
        controller
            .edit_region(&PageId::from("1"), "Bulbasaur evolves at 16")
            .unwrap();

        assert!(controller.save_notes().is_err());
        assert!(controller.store().is_empty());
    }
}
