//! The four cardinal orientations and their clockwise ring.

use crate::error::{Error, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cardinal direction on the plateau.
///
/// The plateau uses a cartesian frame: North is `+Y`, East is `+X`.
/// Left and right are derived from a variant's position in
/// [`Orientation::CLOCKWISE`], so the ring cannot fall out of sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    /// The ring, clockwise from North.
    pub const CLOCKWISE: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }

    /// Looks up the orientation whose symbol is exactly `symbol`.
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(Error::InvalidOrientation {
                symbol: symbol.to_owned(),
            }),
        }
    }

    /// Unit step taken when moving forward.
    pub fn delta(self) -> IVec2 {
        match self {
            Orientation::North => IVec2::Y,
            Orientation::East => IVec2::X,
            Orientation::South => IVec2::NEG_Y,
            Orientation::West => IVec2::NEG_X,
        }
    }

    /// The grid point one step forward from `from`, or `None` if that point
    /// is not representable as an `IVec2`.
    pub fn step(self, from: IVec2) -> Option<IVec2> {
        let delta = self.delta();
        Some(IVec2::new(
            from.x.checked_add(delta.x)?,
            from.y.checked_add(delta.y)?,
        ))
    }

    /// Coordinate form of [`step`](Self::step).
    pub fn move_from(self, x: i32, y: i32) -> Option<(i32, i32)> {
        self.step(IVec2::new(x, y)).map(|next| (next.x, next.y))
    }

    /// Counter-clockwise neighbour.
    pub fn turn_left(self) -> Self {
        Self::CLOCKWISE[(self.index() + Self::CLOCKWISE.len() - 1) % Self::CLOCKWISE.len()]
    }

    /// Clockwise neighbour.
    pub fn turn_right(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % Self::CLOCKWISE.len()]
    }
}

impl TryFrom<char> for Orientation {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        Self::CLOCKWISE
            .into_iter()
            .find(|o| o.symbol() == symbol)
            .ok_or_else(|| Error::InvalidOrientation {
                symbol: symbol.to_string(),
            })
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_symbol(s)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
