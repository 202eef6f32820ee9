//! Command-script parsing.
//!
//! A script is one plateau line followed by any number of rover blocks:
//!
//! ```text
//! 5 5
//! 1 2 N
//! LMLMLMLMM
//! 3 3 E
//! MMRMMRMRRM
//! ```
//!
//! Each line is trimmed, tokens are separated by exactly one space, and
//! movement lines carry one instruction per character. The whole script is
//! validated and every rover is spawned before [`parse_commands`] returns;
//! movements are only applied as the caller drains each
//! [`RoverMovements`] cursor.

use crate::error::{Error, Field, Result};
use crate::interpreter::{InstructionSet, RoverMovements, RoverTrack};
use crate::orientation::Orientation;
use crate::plateau::Plateau;
use crate::rover::Rover;
use std::sync::Arc;
use tracing::debug;

/// A parsed script: the plateau and one movement cursor per rover, in
/// script order.
#[derive(Debug)]
pub struct Mission {
    pub plateau: Arc<Plateau>,
    pub rovers: Vec<RoverMovements>,
}

impl Mission {
    /// Drains every rover in script order, stopping at the first failure.
    pub fn run(self) -> Result<Vec<RoverTrack>> {
        self.rovers
            .into_iter()
            .map(RoverMovements::run_to_end)
            .collect()
    }
}

/// Parses `commands` with the standard `M`/`L`/`R` instruction set.
pub fn parse_commands(commands: &str) -> Result<Mission> {
    CommandParser::default().parse(commands)
}

/// Script parser bound to an [`InstructionSet`].
#[derive(Clone, Debug)]
pub struct CommandParser {
    instructions: InstructionSet,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(InstructionSet::standard())
    }
}

impl CommandParser {
    pub fn new(instructions: InstructionSet) -> Self {
        Self { instructions }
    }

    pub fn instructions(&self) -> &InstructionSet {
        &self.instructions
    }

    pub fn parse(&self, commands: &str) -> Result<Mission> {
        let lines: Vec<&str> = commands.split('\n').map(str::trim).collect();

        if (lines.len() - 1) % 2 != 0 {
            return Err(Error::InvalidCommandCount { lines: lines.len() });
        }

        let plateau = Arc::new(parse_plateau(lines[0], 1)?);

        let rovers = lines[1..]
            .chunks_exact(2)
            .enumerate()
            .map(|(i, block)| {
                // Rover blocks start on line 2.
                let line = 2 + i * 2;
                self.parse_rover(&plateau, block[0], block[1], line)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            max_x = plateau.max_x(),
            max_y = plateau.max_y(),
            rovers = rovers.len(),
            "parsed mission"
        );

        Ok(Mission { plateau, rovers })
    }

    fn parse_rover(
        &self,
        plateau: &Arc<Plateau>,
        init: &str,
        movement: &str,
        line: usize,
    ) -> Result<RoverMovements> {
        let tokens: Vec<&str> = init.split(' ').collect();

        let x = parse_number(tokens.first().copied(), Field::StartX, line)?;
        let y = parse_number(tokens.get(1).copied(), Field::StartY, line)?;
        let orientation = Orientation::from_symbol(tokens.get(2).copied().unwrap_or_default())?;
        if tokens.len() != 3 {
            return Err(Error::InvalidTokenCount {
                line,
                expected: 3,
                found: tokens.len(),
            });
        }

        let program = self.instructions.compile(movement)?;
        let rover = Rover::new(Arc::clone(plateau), x, y, orientation)?;

        debug!(
            line,
            x,
            y,
            %orientation,
            instructions = program.len(),
            "spawned rover"
        );

        Ok(RoverMovements::new(rover, program))
    }
}

fn parse_plateau(command: &str, line: usize) -> Result<Plateau> {
    let tokens: Vec<&str> = command.split(' ').collect();

    let max_x = parse_number(tokens.first().copied(), Field::MaxX, line)?;
    let max_y = parse_number(tokens.get(1).copied(), Field::MaxY, line)?;
    if tokens.len() != 2 {
        return Err(Error::InvalidTokenCount {
            line,
            expected: 2,
            found: tokens.len(),
        });
    }

    Plateau::new(max_x, max_y)
}

fn parse_number(token: Option<&str>, field: Field, line: usize) -> Result<i32> {
    let token = token.unwrap_or_default();
    token.parse().map_err(|_| Error::InvalidNumber {
        line,
        field,
        token: token.to_owned(),
    })
}
