/// Engine diagnostics.
///
/// Defines the closed set of failures that lexing, parsing, and evaluation can
/// report. Every diagnostic carries just enough source position data for a
/// display layer to point at the offending input; none of them render
/// themselves beyond a one-line message.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, ParenSide, Span};
