//! Transparent-paper folding: a 2-D dot set repeatedly reflected and merged
//! across grid lines.
//!
//! A [`Paper`] is a deduplicated set of [`Point`]s. Applying a [`Fold`]
//! partitions the dots at the fold line, mirrors the far half back over the
//! near half, and overlays the two; coincident dots collapse because the
//! backing store is a set. Every transformation is pure and produces a new
//! `Paper`, so intermediate sheets can be counted or rendered before being
//! replaced.

mod axis;
mod error;
mod fold;
mod paper;
mod parse;
mod point;


pub use axis::Axis;
pub use error::OrigamiError;
pub use fold::Fold;
pub use paper::Paper;
pub use parse::parse_input;
pub use point::Point;
