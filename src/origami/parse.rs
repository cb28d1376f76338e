//! Parser for the two-block dots/instructions input format.
//!
//! The first block holds one `x,y` dot per line, the second one
//! `fold along {x|y}=N` instruction per line. Each block ends at the first
//! blank line or at end of input.

use std::str::FromStr;

use super::axis::Axis;
use super::error::OrigamiError;
use super::fold::Fold;
use super::point::Point;

const FOLD_PREFIX: &str = "fold along ";

/// Parses the full puzzle input into dots and fold instructions.
///
/// # Errors
///
/// Fails on an unparsable dot line, an unparsable or unknown-axis fold line,
/// or when no fold instructions are present (which also covers a missing
/// blank-line separator, since instruction lines then fail dot parsing).
pub fn parse_input(input: &str) -> Result<(Vec<Point>, Vec<Fold>), OrigamiError> {
    let mut lines = input.lines();

    let mut dots = Vec::new();
    for line in lines.by_ref() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        dots.push(parse_point(line)?);
    }

    let mut folds = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        folds.push(parse_fold(line)?);
    }
    if folds.is_empty() {
        return Err(OrigamiError::NoFolds);
    }

    Ok((dots, folds))
}

fn parse_point(line: &str) -> Result<Point, OrigamiError> {
    let invalid = || OrigamiError::InvalidPoint {
        line: line.to_string(),
    };
    let (x, y) = line.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}

fn parse_fold(line: &str) -> Result<Fold, OrigamiError> {
    let invalid = || OrigamiError::InvalidInstruction {
        line: line.to_string(),
    };
    let rest = line.strip_prefix(FOLD_PREFIX).ok_or_else(invalid)?;
    let (axis, pos) = rest.split_once('=').ok_or_else(invalid)?;
    let axis = Axis::from_str(axis.trim())?;
    let pos = pos.trim().parse().map_err(|_| invalid())?;
    Ok(Fold::new(axis, pos))
}
