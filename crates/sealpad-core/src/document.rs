//! A loaded document: one store paired with the session reading it.
//!
//! Opening another document or reloading replaces the session outright. The
//! old session's plaintext is zeroized on drop, and any task it issued is
//! rejected by the new one.

use crate::crypto::NewPassword;
use crate::error::Result;
use crate::session::{LifecycleState, VaultSession, WriteOutcome};
use crate::store::DocumentStore;

/// The active vault document.
#[derive(Debug)]
pub struct VaultDocument<S: DocumentStore> {
    store: S,
    session: VaultSession,
}

impl<S: DocumentStore> VaultDocument<S> {
    /// Load `store` into a fresh session.
    pub fn open(store: S) -> Result<Self> {
        let session = VaultSession::load(&store)?;
        Ok(Self { store, session })
    }

    pub fn session(&self) -> &VaultSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut VaultSession {
        &mut self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn state(&self) -> LifecycleState {
        self.session.state()
    }

    pub fn unlock(&mut self, password: impl Into<String>) -> Result<()> {
        self.session.submit_password(password)
    }

    pub fn edit(&mut self, text: impl Into<String>) -> Result<()> {
        self.session.edit(text)
    }

    pub fn save(&mut self, new_password: Option<&NewPassword>) -> Result<()> {
        self.session.save(&mut self.store, new_password)
    }

    pub fn rekey(&mut self, new_password: &NewPassword) -> Result<()> {
        self.session.rekey(&mut self.store, new_password)
    }

    /// Apply a write task that was run elsewhere.
    pub fn complete_write(&mut self, outcome: WriteOutcome) -> Result<()> {
        self.session.complete_write(outcome, &mut self.store)
    }

    pub fn lock(&mut self) -> LifecycleState {
        self.session.lock()
    }

    /// Re-read the store and start over with a new session.
    ///
    /// Unsaved content is discarded.
    pub fn reload(&mut self) -> Result<LifecycleState> {
        self.session = VaultSession::load(&self.store)?;
        Ok(self.session.state())
    }

    /// Switch to another document, discarding the current session.
    ///
    /// On error the current document stays active.
    pub fn switch_to(&mut self, store: S) -> Result<LifecycleState> {
        let session = VaultSession::load(&store)?;
        self.store = store;
        self.session = session;
        tracing::debug!("switched document");
        Ok(self.session.state())
    }
}
