//! # plateau-rover
//!
//! Interprets rover command scripts against a bounded grid plateau.
//!
//! A script creates one [`Plateau`], spawns any number of [`Rover`]s on it and
//! hands back one forward-only [`RoverMovements`] cursor per rover. Draining a
//! cursor applies that rover's instructions one at a time, so a renderer can
//! animate each step as it happens.
//!
//! ```
//! use plateau_rover::{parse_commands, Orientation};
//!
//! let mission = parse_commands("5 5\n1 2 N\nLMLMLMLMM").unwrap();
//! let tracks = mission.run().unwrap();
//! let last = tracks[0].final_state().unwrap();
//! assert_eq!((last.x, last.y, last.orientation), (1, 3, Orientation::North));
//! ```

pub mod error;
pub mod interpreter;
pub mod orientation;
pub mod parser;
pub mod plateau;
pub mod rover;

pub use error::*;
pub use interpreter::*;
pub use orientation::*;
pub use parser::*;
pub use plateau::*;
pub use rover::*;
