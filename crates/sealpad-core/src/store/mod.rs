//! Document I/O: where envelopes come from and where they go.
//!
//! The session only ever sees the [`DocumentStore`] trait, so the codec and
//! state machine stay independent of any host document format.

mod file;
mod memory;
pub mod template;

pub use file::{DocumentFormat, FileStore};
pub use memory::MemoryStore;

use crate::envelope::Envelope;
use crate::error::Result;

/// Document I/O adapter interface.
///
/// Implementations must ensure:
/// - `persist` replaces the previous artifact atomically: it is either fully
///   replaced or left untouched
/// - plaintext never reaches durable storage
pub trait DocumentStore: Send {
    /// Load the stored envelope.
    ///
    /// Returns `Ok(None)` for a new document that has never been saved.
    fn load_envelope(&self) -> Result<Option<Envelope>>;

    /// Persist `envelope`, superseding whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns `SealpadError::Persistence` if the artifact could not be
    /// written. The previous artifact must still be intact in that case.
    fn persist(&mut self, envelope: &Envelope) -> Result<()>;
}
