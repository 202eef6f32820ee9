//! Rover state and operations.

use crate::error::{Error, Result};
use crate::orientation::Orientation;
use crate::plateau::Plateau;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A positioned, oriented rover confined to a shared [`Plateau`].
///
/// Every mutation is validated against the plateau first; a rejected
/// mutation leaves the rover untouched.
#[derive(Clone, Debug)]
pub struct Rover {
    plateau: Arc<Plateau>,

    /// Current grid point.
    position: IVec2,

    /// Current heading.
    orientation: Orientation,
}

impl Rover {
    /// Spawns a rover at `(x, y)` facing `orientation`.
    ///
    /// Fails with [`Error::OutOfBounds`] if the point is not on the plateau.
    pub fn new(plateau: Arc<Plateau>, x: i32, y: i32, orientation: Orientation) -> Result<Self> {
        let position = IVec2::new(x, y);
        check_bounds(&plateau, position)?;
        Ok(Self {
            plateau,
            position,
            orientation,
        })
    }

    /// Spawns a rover from an orientation symbol such as `"N"`.
    ///
    /// The symbol is resolved before the position is checked.
    pub fn spawn_symbol(plateau: Arc<Plateau>, x: i32, y: i32, symbol: &str) -> Result<Self> {
        let orientation = Orientation::from_symbol(symbol)?;
        Self::new(plateau, x, y, orientation)
    }

    pub fn plateau(&self) -> &Plateau {
        &self.plateau
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_position(&mut self, x: i32, y: i32) -> Result<&mut Self> {
        let position = IVec2::new(x, y);
        check_bounds(&self.plateau, position)?;
        self.position = position;
        Ok(self)
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self
    }

    /// Rotates 90 degrees counter-clockwise.
    pub fn turn_left(&mut self) -> &mut Self {
        self.orientation = self.orientation.turn_left();
        self
    }

    /// Rotates 90 degrees clockwise.
    pub fn turn_right(&mut self) -> &mut Self {
        self.orientation = self.orientation.turn_right();
        self
    }

    /// Moves one grid point forward.
    ///
    /// Stepping off the plateau fails with [`Error::OutOfBounds`] and the
    /// rover stays where it was.
    pub fn move_forward(&mut self) -> Result<&mut Self> {
        match self.orientation.step(self.position) {
            Some(next) => self.set_position(next.x, next.y),
            None => {
                let delta = self.orientation.delta();
                Err(Error::OutOfBounds {
                    x: i64::from(self.position.x) + i64::from(delta.x),
                    y: i64::from(self.position.y) + i64::from(delta.y),
                })
            }
        }
    }

    pub fn apply(&mut self, op: RoverOp) -> Result<&mut Self> {
        match op {
            RoverOp::Move => self.move_forward(),
            RoverOp::TurnLeft => Ok(self.turn_left()),
            RoverOp::TurnRight => Ok(self.turn_right()),
        }
    }

    /// Copies out the current state.
    pub fn snapshot(&self) -> RoverSnapshot {
        RoverSnapshot {
            x: self.position.x,
            y: self.position.y,
            orientation: self.orientation,
        }
    }
}

fn check_bounds(plateau: &Plateau, position: IVec2) -> Result<()> {
    if plateau.contains(position) {
        Ok(())
    } else {
        Err(Error::OutOfBounds {
            x: position.x.into(),
            y: position.y.into(),
        })
    }
}

/// One observed rover state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverSnapshot {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl RoverSnapshot {
    pub fn orientation_symbol(&self) -> char {
        self.orientation.symbol()
    }
}

impl fmt::Display for RoverSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation)
    }
}

/// Operations a rover can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverOp {
    /// Move forward one grid point (`M`).
    Move,
    /// Turn 90 degrees left (`L`).
    TurnLeft,
    /// Turn 90 degrees right (`R`).
    TurnRight,
}
