//! Errors raised while parsing a command script or moving a rover.

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Plateau axis named by a dimension error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// Numeric field of a command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    MaxX,
    MaxY,
    StartX,
    StartY,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::MaxX => f.write_str("maximum X"),
            Field::MaxY => f.write_str("maximum Y"),
            Field::StartX => f.write_str("start X"),
            Field::StartY => f.write_str("start Y"),
        }
    }
}

/// Coarse failure category, one per class of script fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong line count, unparsable numbers, wrong token count, degenerate plateau.
    MalformedScript,
    /// A rover was spawned or moved outside the plateau.
    OutOfBounds,
    /// An orientation symbol outside `N`, `E`, `S`, `W`.
    InvalidOrientation,
    /// A movement character outside the instruction set.
    InvalidInstruction,
}

/// Everything that can go wrong while parsing a script or moving a rover.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(
        "invalid number of commands ({lines} lines): the 1st line initialises the plateau \
         and each subsequent pair of lines initialises and moves one rover"
    )]
    InvalidCommandCount { lines: usize },

    #[error("the maximum {axis} value {value} must be greater than 0")]
    InvalidDimension { axis: Axis, value: i32 },

    #[error("line {line}: the specified {field} value {token:?} is invalid")]
    InvalidNumber {
        line: usize,
        field: Field,
        token: String,
    },

    #[error("line {line}: expected {expected} space-separated values, found {found}")]
    InvalidTokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Coordinates are `i64` so a step past the `i32` range reports the point it would reach.
    #[error("({x}, {y}) is not inside the plateau.")]
    OutOfBounds { x: i64, y: i64 },

    #[error("{symbol:?} is an invalid orientation")]
    InvalidOrientation { symbol: String },

    #[error("\"{instruction}\" is an invalid rover movement")]
    InvalidInstruction { instruction: char, index: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCommandCount { .. }
            | Error::InvalidDimension { .. }
            | Error::InvalidNumber { .. }
            | Error::InvalidTokenCount { .. } => ErrorKind::MalformedScript,
            Error::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Error::InvalidOrientation { .. } => ErrorKind::InvalidOrientation,
            Error::InvalidInstruction { .. } => ErrorKind::InvalidInstruction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let dim = Error::InvalidDimension {
            axis: Axis::Y,
            value: 0,
        };
        assert_eq!(dim.kind(), ErrorKind::MalformedScript);
        assert_eq!(
            Error::OutOfBounds { x: -1, y: 0 }.kind(),
            ErrorKind::OutOfBounds
        );
        assert_eq!(
            Error::InvalidInstruction {
                instruction: '_',
                index: 4
            }
            .kind(),
            ErrorKind::InvalidInstruction
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = Error::InvalidNumber {
            line: 1,
            field: Field::MaxX,
            token: "_".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 1: the specified maximum X value \"_\" is invalid"
        );
        assert_eq!(
            Error::OutOfBounds { x: 6, y: 3 }.to_string(),
            "(6, 3) is not inside the plateau."
        );
        assert_eq!(
            Error::InvalidInstruction {
                instruction: '_',
                index: 4
            }
            .to_string(),
            "\"_\" is an invalid rover movement"
        );
    }
}
