//! Collaborator traits
//!
//! These traits define the interface between the face engine and the
//! host that runs it.

pub mod diagnostics;
pub mod display;
pub mod timer;

#[cfg(feature = "defmt")]
pub use diagnostics::DefmtSink;
pub use diagnostics::{Diagnostic, DiagnosticSink, NoopSink};
pub use display::DrawSurface;
pub use timer::{Clock, WakeTimer};
