//! Detached crypto work for the vault session.
//!
//! Key derivation is slow on purpose, so the session hands the heavy part of
//! an operation out as a task. A task owns everything it needs, can run on
//! any thread, and yields an outcome that the session applies only if the
//! task's ticket is still current.

use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::codec::EnvelopeCodec;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::payload::VaultPayload;

/// Identifies one issued task within one session and lifecycle epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub(crate) session: u64,
    pub(crate) epoch: u64,
    pub(crate) seq: u64,
}

/// Kind of envelope-producing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    /// First save of a never-persisted vault under a new password.
    FirstSave,
    /// Save of an unlocked vault under its current password.
    Save,
    /// Save under a new password, superseding the old envelope.
    Rekey,
}

/// Pending password check against a stored envelope.
#[derive(Debug)]
pub struct UnlockTask {
    pub(crate) ticket: Ticket,
    pub(crate) envelope: Envelope,
    pub(crate) password: SecretString,
    pub(crate) codec: EnvelopeCodec,
}

impl UnlockTask {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Derive the key and attempt authenticated decryption.
    pub fn run(self) -> UnlockOutcome {
        let result = self
            .codec
            .decrypt(&self.envelope, self.password.expose_secret());
        UnlockOutcome {
            ticket: self.ticket,
            password: self.password,
            result,
        }
    }
}

/// Result of an [`UnlockTask`], to be applied with `VaultSession::complete_unlock`.
#[derive(Debug)]
pub struct UnlockOutcome {
    pub(crate) ticket: Ticket,
    pub(crate) password: SecretString,
    pub(crate) result: Result<VaultPayload>,
}

impl UnlockOutcome {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
}

/// Pending encryption of a payload snapshot.
#[derive(Debug)]
pub struct WriteTask {
    pub(crate) ticket: Ticket,
    pub(crate) kind: WriteKind,
    pub(crate) snapshot: VaultPayload,
    pub(crate) password: SecretString,
    pub(crate) codec: EnvelopeCodec,
}

impl WriteTask {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn kind(&self) -> WriteKind {
        self.kind
    }

    /// Encrypt the snapshot into a new envelope.
    pub fn run(self) -> WriteOutcome {
        let result = self
            .codec
            .encrypt(&self.snapshot, self.password.expose_secret());
        WriteOutcome {
            ticket: self.ticket,
            kind: self.kind,
            content: Zeroizing::new(self.snapshot.content().to_owned()),
            password: self.password,
            result,
        }
    }
}

/// Result of a [`WriteTask`], to be applied with `VaultSession::complete_write`.
pub struct WriteOutcome {
    pub(crate) ticket: Ticket,
    pub(crate) kind: WriteKind,
    pub(crate) content: Zeroizing<String>,
    pub(crate) password: SecretString,
    pub(crate) result: Result<Envelope>,
}

impl std::fmt::Debug for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteOutcome")
            .field("ticket", &self.ticket)
            .field("kind", &self.kind)
            .field("content", &format_args!("[{} bytes]", self.content.len()))
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl WriteOutcome {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn kind(&self) -> WriteKind {
        self.kind
    }
}
