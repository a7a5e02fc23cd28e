//! Diagnostic events emitted while materializing a structure.
//!
//! The materializer never logs directly; it reports to an [`EventSink`] that
//! the caller injects.

mod event;
mod sink;

pub use event::Event;
pub use sink::{EventSink, TracingSink};

#[cfg(test)]
pub(crate) use sink::RecordingSink;
