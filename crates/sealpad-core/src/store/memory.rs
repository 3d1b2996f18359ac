use crate::envelope::Envelope;
use crate::error::{Result, SealpadError};

use super::DocumentStore;

/// In-memory document store.
///
/// Useful for embedding and for tests; writes can be made to fail on demand.
#[derive(Debug, Default)]
pub struct MemoryStore {
    envelope: Option<Envelope>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `envelope`.
    pub fn with_envelope(envelope: Envelope) -> Self {
        Self {
            envelope: Some(envelope),
            ..Self::default()
        }
    }

    /// Make every subsequent `persist` fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The currently stored envelope.
    pub fn envelope(&self) -> Option<&Envelope> {
        self.envelope.as_ref()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DocumentStore for MemoryStore {
    fn load_envelope(&self) -> Result<Option<Envelope>> {
        Ok(self.envelope.clone())
    }

    fn persist(&mut self, envelope: &Envelope) -> Result<()> {
        if self.fail_writes {
            return Err(SealpadError::Persistence(
                "Memory store is read-only".to_string(),
            ));
        }
        self.envelope = Some(envelope.clone());
        self.writes += 1;
        Ok(())
    }
}
