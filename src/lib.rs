//! adventkit - self-contained solutions to small recreational puzzles.
//!
//! Each module is one independent puzzle: it parses a tiny textual input,
//! runs a pure in-memory computation, and exposes the pieces its CLI binary
//! prints. No module depends on another and nothing persists across runs.

pub mod origami;
pub mod population;
