//! Vault session: the lifecycle state machine around one loaded document.
//!
//! ```text
//!   load (no envelope) ──► Pristine ──save(new pw)──► Unlocked ◄──┐
//!   load (envelope)    ──► Locked ──submit_password──► Unlocked   │ save / rekey
//!                            ▲                             │      │
//!                            └────────── lock ─────────────┴──────┘
//! ```
//!
//! Plaintext and the master password exist only while the session is
//! Pristine or Unlocked, and are zeroized when dropped. Heavy crypto runs in
//! detached tasks (see [`task`]); each operation class (unlock, write) has a
//! single pending slot and a result is only applied if its ticket still owns
//! that slot in the same session and lifecycle epoch.

pub mod task;

use std::sync::atomic::{AtomicU64, Ordering};

use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::codec::EnvelopeCodec;
use crate::crypto::password::duplicate_secret;
use crate::crypto::{NewPassword, EMPTY_PASSWORD_MESSAGE};
use crate::envelope::Envelope;
use crate::error::{Result, SealpadError};
use crate::payload::{VaultId, VaultPayload};
use crate::store::DocumentStore;

pub use task::{Ticket, UnlockOutcome, UnlockTask, WriteKind, WriteOutcome, WriteTask};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Externally visible lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// New document, never persisted; editable without a password.
    Pristine,
    /// An envelope exists and no plaintext is in memory.
    Locked,
    /// Plaintext and master password are resident.
    Unlocked,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Pristine => "pristine",
            LifecycleState::Locked => "locked",
            LifecycleState::Unlocked => "unlocked",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Unlock,
    Write,
}

#[derive(Debug, Default)]
struct PendingSlots {
    unlock: Option<u64>,
    write: Option<u64>,
}

struct UnlockedVault {
    payload: VaultPayload,
    password: SecretString,
    /// Content of the most recently persisted envelope.
    baseline: Zeroizing<String>,
    envelope: Envelope,
}

enum Stage {
    Pristine { payload: VaultPayload },
    Locked { envelope: Envelope },
    Unlocked(UnlockedVault),
}

/// One loaded vault document and its working state.
pub struct VaultSession {
    id: u64,
    epoch: u64,
    next_seq: u64,
    pending: PendingSlots,
    codec: EnvelopeCodec,
    stage: Stage,
}

impl std::fmt::Debug for VaultSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSession")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("dirty", &self.is_dirty())
            .finish_non_exhaustive()
    }
}

impl VaultSession {
    /// Start a session for whatever `store` currently holds.
    pub fn load<S: DocumentStore + ?Sized>(store: &S) -> Result<Self> {
        Self::load_with_codec(store, EnvelopeCodec::default())
    }

    pub fn load_with_codec<S: DocumentStore + ?Sized>(
        store: &S,
        codec: EnvelopeCodec,
    ) -> Result<Self> {
        let envelope = store.load_envelope()?;
        Ok(Self::from_envelope(envelope, codec))
    }

    /// Start a session from an already-loaded envelope (`None` = new document).
    pub fn from_envelope(envelope: Option<Envelope>, codec: EnvelopeCodec) -> Self {
        let stage = match envelope {
            Some(envelope) => Stage::Locked { envelope },
            None => Stage::Pristine {
                payload: VaultPayload::fresh(),
            },
        };
        let session = Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            epoch: 0,
            next_seq: 0,
            pending: PendingSlots::default(),
            codec,
            stage,
        };
        tracing::debug!(session = session.id, state = session.state().as_str(), "session loaded");
        session
    }

    pub fn state(&self) -> LifecycleState {
        match self.stage {
            Stage::Pristine { .. } => LifecycleState::Pristine,
            Stage::Locked { .. } => LifecycleState::Locked,
            Stage::Unlocked(_) => LifecycleState::Unlocked,
        }
    }

    /// Whether working content differs from the last persisted content.
    ///
    /// A Pristine vault is dirty iff its content is non-empty; a Locked
    /// vault is never dirty.
    pub fn is_dirty(&self) -> bool {
        match &self.stage {
            Stage::Pristine { payload } => !payload.content().is_empty(),
            Stage::Locked { .. } => false,
            Stage::Unlocked(vault) => vault.payload.content() != vault.baseline.as_str(),
        }
    }

    /// Working content, if any plaintext is resident.
    pub fn content(&self) -> Option<&str> {
        self.payload().map(VaultPayload::content)
    }

    pub fn vault_id(&self) -> Option<&VaultId> {
        self.payload().map(VaultPayload::vault_id)
    }

    /// The most recently loaded or persisted envelope.
    pub fn envelope(&self) -> Option<&Envelope> {
        match &self.stage {
            Stage::Pristine { .. } => None,
            Stage::Locked { envelope } => Some(envelope),
            Stage::Unlocked(vault) => Some(&vault.envelope),
        }
    }

    pub fn codec(&self) -> EnvelopeCodec {
        self.codec
    }

    fn payload(&self) -> Option<&VaultPayload> {
        match &self.stage {
            Stage::Pristine { payload } => Some(payload),
            Stage::Locked { .. } => None,
            Stage::Unlocked(vault) => Some(&vault.payload),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<u64> {
        match slot {
            Slot::Unlock => &mut self.pending.unlock,
            Slot::Write => &mut self.pending.write,
        }
    }

    /// Issue a ticket for `slot`, superseding any task already pending there.
    fn issue(&mut self, slot: Slot) -> Ticket {
        self.next_seq += 1;
        let seq = self.next_seq;
        if let Some(previous) = self.slot_mut(slot).replace(seq) {
            tracing::debug!(session = self.id, ?slot, previous, "pending task superseded");
        }
        Ticket {
            session: self.id,
            epoch: self.epoch,
            seq,
        }
    }

    /// Release `slot` if `ticket` still owns it.
    fn claim(&mut self, ticket: Ticket, slot: Slot) -> Result<()> {
        let current = *self.slot_mut(slot);
        if ticket.session != self.id || ticket.epoch != self.epoch || current != Some(ticket.seq)
        {
            tracing::debug!(session = self.id, ?slot, "discarding stale task result");
            return Err(SealpadError::Superseded);
        }
        *self.slot_mut(slot) = None;
        Ok(())
    }

    // --- Editing ---

    /// Replace the working content.
    ///
    /// # Errors
    ///
    /// Returns `SealpadError::InvalidState` while Locked.
    pub fn edit(&mut self, text: impl Into<String>) -> Result<()> {
        let payload = match &mut self.stage {
            Stage::Pristine { payload } => payload,
            Stage::Unlocked(vault) => &mut vault.payload,
            Stage::Locked { .. } => {
                return Err(SealpadError::InvalidState("Vault is locked".to_string()))
            }
        };
        payload.set_content(text.into());
        tracing::trace!(session = self.id, "content edited");
        Ok(())
    }

    // --- Unlock ---

    /// Start verifying `password` against the stored envelope.
    ///
    /// A second call before the first completes supersedes it.
    pub fn begin_unlock(&mut self, password: impl Into<String>) -> Result<UnlockTask> {
        let envelope = match &self.stage {
            Stage::Locked { envelope } => envelope.clone(),
            _ => {
                return Err(SealpadError::InvalidState(
                    "Vault is not locked".to_string(),
                ))
            }
        };
        let ticket = self.issue(Slot::Unlock);
        Ok(UnlockTask {
            ticket,
            envelope,
            password: SecretString::from(password.into()),
            codec: self.codec,
        })
    }

    /// Apply the result of an unlock task.
    ///
    /// # Errors
    ///
    /// - `SealpadError::Superseded` if the task is no longer current
    /// - `SealpadError::AuthFailure` for a wrong password or corrupt
    ///   envelope; the session stays Locked and may be retried freely
    pub fn complete_unlock(&mut self, outcome: UnlockOutcome) -> Result<()> {
        self.claim(outcome.ticket, Slot::Unlock)?;
        let UnlockOutcome {
            password, result, ..
        } = outcome;

        let envelope = match &self.stage {
            Stage::Locked { envelope } => envelope.clone(),
            _ => {
                return Err(SealpadError::InvalidState(
                    "Vault is not locked".to_string(),
                ))
            }
        };

        match result {
            Ok(payload) => {
                let baseline = Zeroizing::new(payload.content().to_owned());
                self.stage = Stage::Unlocked(UnlockedVault {
                    payload,
                    password,
                    baseline,
                    envelope,
                });
                tracing::info!(session = self.id, "vault unlocked");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(session = self.id, error = %err, "unlock failed");
                Err(err)
            }
        }
    }

    /// Verify `password` and unlock, synchronously.
    pub fn submit_password(&mut self, password: impl Into<String>) -> Result<()> {
        let task = self.begin_unlock(password)?;
        self.complete_unlock(task.run())
    }

    // --- Save / rekey ---

    /// Start a save of the current content.
    ///
    /// A Pristine vault needs `new_password` (validated here); an Unlocked
    /// vault saves under its existing password and must not be given one.
    ///
    /// # Errors
    ///
    /// - `SealpadError::Validation` for an empty or mismatched new password
    /// - `SealpadError::InvalidState` while Locked, or when a new password
    ///   is offered to an already keyed vault
    pub fn begin_save(&mut self, new_password: Option<&NewPassword>) -> Result<WriteTask> {
        let (kind, snapshot, password) = match (&self.stage, new_password) {
            (Stage::Pristine { payload }, Some(new_password)) => {
                (WriteKind::FirstSave, payload.clone(), new_password.validate()?)
            }
            (Stage::Pristine { .. }, None) => {
                return Err(SealpadError::Validation(EMPTY_PASSWORD_MESSAGE.to_string()))
            }
            (Stage::Unlocked(vault), None) => (
                WriteKind::Save,
                vault.payload.clone(),
                duplicate_secret(&vault.password),
            ),
            (Stage::Unlocked(_), Some(_)) => {
                return Err(SealpadError::InvalidState(
                    "Vault already has a master password; rekey to change it".to_string(),
                ))
            }
            (Stage::Locked { .. }, _) => {
                return Err(SealpadError::InvalidState("Vault is locked".to_string()))
            }
        };
        Ok(self.write_task(kind, snapshot, password))
    }

    /// Start re-encrypting the current content under a new password.
    ///
    /// # Errors
    ///
    /// - `SealpadError::Validation` for an empty or mismatched new password
    /// - `SealpadError::InvalidState` unless Unlocked
    pub fn begin_rekey(&mut self, new_password: &NewPassword) -> Result<WriteTask> {
        let snapshot = match &self.stage {
            Stage::Unlocked(vault) => vault.payload.clone(),
            Stage::Pristine { .. } => {
                return Err(SealpadError::InvalidState(
                    "Vault has never been saved".to_string(),
                ))
            }
            Stage::Locked { .. } => {
                return Err(SealpadError::InvalidState("Vault is locked".to_string()))
            }
        };
        let password = new_password.validate()?;
        Ok(self.write_task(WriteKind::Rekey, snapshot, password))
    }

    fn write_task(
        &mut self,
        kind: WriteKind,
        snapshot: VaultPayload,
        password: SecretString,
    ) -> WriteTask {
        let ticket = self.issue(Slot::Write);
        WriteTask {
            ticket,
            kind,
            snapshot,
            password,
            codec: self.codec,
        }
    }

    /// Persist the envelope produced by a write task and adopt it.
    ///
    /// On success the snapshot content becomes the new baseline, so edits
    /// made after `begin_save` keep the session dirty. On any error the
    /// session is unchanged and the previously persisted envelope (and
    /// password) remain in effect.
    ///
    /// # Errors
    ///
    /// - `SealpadError::Superseded` if the task is no longer current
    /// - `SealpadError::Persistence` if `store` could not write the artifact
    pub fn complete_write<S: DocumentStore + ?Sized>(
        &mut self,
        outcome: WriteOutcome,
        store: &mut S,
    ) -> Result<()> {
        self.claim(outcome.ticket, Slot::Write)?;
        let WriteOutcome {
            kind,
            content,
            password,
            result,
            ..
        } = outcome;
        let envelope = result?;

        let stage_matches = matches!(
            (&self.stage, kind),
            (Stage::Pristine { .. }, WriteKind::FirstSave)
                | (Stage::Unlocked(_), WriteKind::Save | WriteKind::Rekey)
        );
        if !stage_matches {
            return Err(SealpadError::InvalidState(format!(
                "Cannot apply {:?} to a {} vault",
                kind,
                self.state().as_str()
            )));
        }

        if let Err(err) = store.persist(&envelope) {
            tracing::warn!(session = self.id, ?kind, error = %err, "persist failed");
            return Err(match err {
                SealpadError::Persistence(_) => err,
                other => SealpadError::Persistence(other.to_string()),
            });
        }

        if let Stage::Unlocked(vault) = &mut self.stage {
            vault.baseline = content;
            vault.envelope = envelope;
            vault.password = password;
        } else {
            let previous = std::mem::replace(
                &mut self.stage,
                Stage::Locked {
                    envelope: envelope.clone(),
                },
            );
            if let Stage::Pristine { payload } = previous {
                self.stage = Stage::Unlocked(UnlockedVault {
                    payload,
                    password,
                    baseline: content,
                    envelope,
                });
            }
        }

        tracing::info!(session = self.id, ?kind, dirty = self.is_dirty(), "vault saved");
        Ok(())
    }

    /// Save synchronously. See [`VaultSession::begin_save`].
    pub fn save<S: DocumentStore + ?Sized>(
        &mut self,
        store: &mut S,
        new_password: Option<&NewPassword>,
    ) -> Result<()> {
        let task = self.begin_save(new_password)?;
        self.complete_write(task.run(), store)
    }

    /// Rekey synchronously. See [`VaultSession::begin_rekey`].
    pub fn rekey<S: DocumentStore + ?Sized>(
        &mut self,
        store: &mut S,
        new_password: &NewPassword,
    ) -> Result<()> {
        let task = self.begin_rekey(new_password)?;
        self.complete_write(task.run(), store)
    }

    // --- Lock ---

    /// Discard plaintext and password, and invalidate pending tasks.
    ///
    /// A vault with a persisted envelope becomes Locked. A never-persisted
    /// vault is reset to a fresh, empty Pristine vault with a new id.
    pub fn lock(&mut self) -> LifecycleState {
        self.epoch += 1;
        self.pending = PendingSlots::default();

        let previous = std::mem::replace(
            &mut self.stage,
            Stage::Pristine {
                payload: VaultPayload::fresh(),
            },
        );
        match previous {
            Stage::Unlocked(vault) => {
                self.stage = Stage::Locked {
                    envelope: vault.envelope,
                };
            }
            Stage::Locked { envelope } => {
                self.stage = Stage::Locked { envelope };
            }
            Stage::Pristine { .. } => {}
        }

        tracing::info!(session = self.id, state = self.state().as_str(), "vault locked");
        self.state()
    }

    /// Whether `password` is the master password of the unlocked vault.
    ///
    /// Compares against the in-memory password; no key derivation.
    #[cfg(test)]
    pub(crate) fn password_matches(&self, password: &str) -> bool {
        match &self.stage {
            Stage::Unlocked(vault) => vault.password.expose_secret() == password,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decrypt, encrypt};
    use crate::store::MemoryStore;

    fn locked_store(content: &str, vault_id: &str, password: &str) -> MemoryStore {
        let payload = VaultPayload::new(content, VaultId::new(vault_id));
        MemoryStore::with_envelope(encrypt(&payload, password).unwrap())
    }

    #[test]
    fn test_load_without_envelope_is_pristine() {
        let session = VaultSession::load(&MemoryStore::new()).unwrap();

        assert_eq!(session.state(), LifecycleState::Pristine);
        assert_eq!(session.content(), Some(""));
        assert!(session.vault_id().is_some());
        assert!(!session.is_dirty());
        assert!(session.envelope().is_none());
    }

    #[test]
    fn test_load_with_envelope_is_locked() {
        let store = locked_store("hello", "v1", "p@ss");
        let session = VaultSession::load(&store).unwrap();

        assert_eq!(session.state(), LifecycleState::Locked);
        assert_eq!(session.content(), None);
        assert_eq!(session.vault_id(), None);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_pristine_dirty_tracks_non_empty_content() {
        let mut session = VaultSession::load(&MemoryStore::new()).unwrap();

        session.edit("some new text").unwrap();
        assert!(session.is_dirty());

        session.edit("").unwrap();
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_first_save_requires_password() {
        let mut store = MemoryStore::new();
        let mut session = VaultSession::load(&store).unwrap();
        session.edit("some content").unwrap();

        let err = session
            .save(&mut store, Some(&NewPassword::new("", "")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Password cannot be empty.");

        let err = session.save(&mut store, None).unwrap_err();
        assert_eq!(err.to_string(), "Password cannot be empty.");

        let err = session
            .save(
                &mut store,
                Some(&NewPassword::new("password123", "password456")),
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match.");

        assert_eq!(store.writes(), 0);
        assert_eq!(session.state(), LifecycleState::Pristine);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_first_save_unlocks_and_clears_dirty() {
        let mut store = MemoryStore::new();
        let mut session = VaultSession::load(&store).unwrap();
        session.edit("This is my new secret note.").unwrap();
        let vault_id = session.vault_id().cloned().unwrap();

        session
            .save(
                &mut store,
                Some(&NewPassword::new("supersecret123", "supersecret123")),
            )
            .unwrap();

        assert_eq!(session.state(), LifecycleState::Unlocked);
        assert!(!session.is_dirty());
        assert_eq!(session.envelope(), store.envelope());

        let decrypted = decrypt(store.envelope().unwrap(), "supersecret123").unwrap();
        assert_eq!(decrypted.content(), "This is my new secret note.");
        assert_eq!(decrypted.vault_id(), &vault_id);
    }

    #[test]
    fn test_unlock_with_wrong_password_stays_locked() {
        let store = locked_store("hello", "v1", "p@ss");
        let mut session = VaultSession::load(&store).unwrap();

        let err = session.submit_password("wrong").unwrap_err();
        assert!(err.is_auth_failure());
        assert_eq!(err.to_string(), "Invalid password");
        assert_eq!(session.state(), LifecycleState::Locked);

        // No retry limit: the correct password still works afterwards.
        session.submit_password("p@ss").unwrap();
        assert_eq!(session.state(), LifecycleState::Unlocked);
        assert_eq!(session.content(), Some("hello"));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_dirty_clears_when_content_returns_to_baseline() {
        let store = locked_store("original", "v1", "p@ss");
        let mut session = VaultSession::load(&store).unwrap();
        session.submit_password("p@ss").unwrap();

        session.edit("changed").unwrap();
        assert!(session.is_dirty());
        session.edit("original").unwrap();
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_unlocked_save_rejects_new_password() {
        let mut store = locked_store("hello", "v1", "p@ss");
        let mut session = VaultSession::load(&store).unwrap();
        session.submit_password("p@ss").unwrap();

        let result = session.save(&mut store, Some(&NewPassword::new("x", "x")));
        assert!(matches!(result, Err(SealpadError::InvalidState(_))));
    }

    #[test]
    fn test_operations_rejected_while_locked() {
        let mut store = locked_store("hello", "v1", "p@ss");
        let mut session = VaultSession::load(&store).unwrap();

        assert!(matches!(
            session.edit("x"),
            Err(SealpadError::InvalidState(_))
        ));
        assert!(matches!(
            session.save(&mut store, None),
            Err(SealpadError::InvalidState(_))
        ));
        assert!(matches!(
            session.rekey(&mut store, &NewPassword::new("n", "n")),
            Err(SealpadError::InvalidState(_))
        ));
    }

    #[test]
    fn test_rekey_rejected_for_pristine() {
        let mut store = MemoryStore::new();
        let mut session = VaultSession::load(&store).unwrap();

        let result = session.rekey(&mut store, &NewPassword::new("n", "n"));
        assert!(matches!(result, Err(SealpadError::InvalidState(_))));
    }

    #[test]
    fn test_unlock_rejected_unless_locked() {
        let mut session = VaultSession::load(&MemoryStore::new()).unwrap();
        assert!(matches!(
            session.begin_unlock("anything"),
            Err(SealpadError::InvalidState(_))
        ));
    }

    #[test]
    fn test_lock_pristine_resets_to_fresh_vault() {
        let mut session = VaultSession::load(&MemoryStore::new()).unwrap();
        let first_id = session.vault_id().cloned().unwrap();
        session.edit("this text will disappear").unwrap();

        assert_eq!(session.lock(), LifecycleState::Pristine);
        assert_eq!(session.content(), Some(""));
        assert!(!session.is_dirty());
        assert_ne!(session.vault_id().unwrap(), &first_id);
    }

    #[test]
    fn test_lock_unlocked_discards_plaintext() {
        let store = locked_store("hello", "v1", "p@ss");
        let mut session = VaultSession::load(&store).unwrap();
        session.submit_password("p@ss").unwrap();
        session.edit("unsaved edit").unwrap();

        assert_eq!(session.lock(), LifecycleState::Locked);
        assert_eq!(session.content(), None);
        assert!(!session.password_matches("p@ss"));
        assert_eq!(session.envelope(), store.envelope());
    }

    #[test]
    fn test_newer_unlock_supersedes_older() {
        let store = locked_store("hello", "v1", "p@ss");
        let mut session = VaultSession::load(&store).unwrap();

        let first = session.begin_unlock("p@ss").unwrap();
        let second = session.begin_unlock("p@ss").unwrap();

        let stale = first.run();
        assert!(matches!(
            session.complete_unlock(stale),
            Err(SealpadError::Superseded)
        ));
        assert_eq!(session.state(), LifecycleState::Locked);

        session.complete_unlock(second.run()).unwrap();
        assert_eq!(session.state(), LifecycleState::Unlocked);
    }

    #[test]
    fn test_outcome_cannot_be_applied_twice() {
        let store = locked_store("hello", "v1", "wrong-is-fine");
        let mut session = VaultSession::load(&store).unwrap();

        let task = session.begin_unlock("nope").unwrap();
        let ticket = task.ticket();
        let outcome = task.run();
        assert_eq!(outcome.ticket(), ticket);
        assert!(session.complete_unlock(outcome).unwrap_err().is_auth_failure());

        // The slot was released; a replay of the same ticket is stale.
        let replay = UnlockOutcome {
            ticket,
            password: SecretString::from("wrong-is-fine".to_string()),
            result: Ok(VaultPayload::new("forged", VaultId::new("v1"))),
        };
        assert!(matches!(
            session.complete_unlock(replay),
            Err(SealpadError::Superseded)
        ));
        assert_eq!(session.state(), LifecycleState::Locked);
    }

    #[test]
    fn test_lock_discards_in_flight_write() {
        let mut store = locked_store("hello", "v1", "p@ss");
        let mut session = VaultSession::load(&store).unwrap();
        session.submit_password("p@ss").unwrap();
        session.edit("pending").unwrap();

        let task = session.begin_save(None).unwrap();
        session.lock();

        let result = session.complete_write(task.run(), &mut store);
        assert!(matches!(result, Err(SealpadError::Superseded)));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_edits_during_save_keep_session_dirty() {
        let mut store = locked_store("v0", "v1", "p@ss");
        let mut session = VaultSession::load(&store).unwrap();
        session.submit_password("p@ss").unwrap();
        session.edit("snapshot").unwrap();

        let task = session.begin_save(None).unwrap();
        session.edit("typed while saving").unwrap();
        session.complete_write(task.run(), &mut store).unwrap();

        assert!(session.is_dirty());
        let saved = decrypt(store.envelope().unwrap(), "p@ss").unwrap();
        assert_eq!(saved.content(), "snapshot");

        session.edit("snapshot").unwrap();
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_persist_failure_keeps_dirty_and_old_envelope() {
        let mut store = locked_store("hello", "v1", "p@ss");
        let original = store.envelope().cloned();
        let mut session = VaultSession::load(&store).unwrap();
        session.submit_password("p@ss").unwrap();
        session.edit("new content").unwrap();

        store.set_fail_writes(true);
        let err = session.save(&mut store, None).unwrap_err();
        assert!(matches!(err, SealpadError::Persistence(_)));
        assert!(session.is_dirty());
        assert_eq!(session.envelope(), original.as_ref());

        store.set_fail_writes(false);
        session.save(&mut store, None).unwrap();
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_failed_rekey_keeps_old_password() {
        let mut store = locked_store("hello", "v1", "A");
        let mut session = VaultSession::load(&store).unwrap();
        session.submit_password("A").unwrap();

        store.set_fail_writes(true);
        assert!(session.rekey(&mut store, &NewPassword::new("B", "B")).is_err());
        assert!(session.password_matches("A"));
        assert!(decrypt(store.envelope().unwrap(), "A").is_ok());
    }

    #[test]
    fn test_debug_output_hides_content() {
        let mut session = VaultSession::load(&MemoryStore::new()).unwrap();
        session.edit("very private words").unwrap();
        let debug = format!("{:?}", session);
        assert!(!debug.contains("very private"));
        assert!(debug.contains("Pristine"));
    }
}
