//! Instruction decoding and step-by-step application to a rover.
//!
//! An [`InstructionSet`] maps movement characters to [`RoverOp`]s and
//! validates a whole movement line up front with
//! [`InstructionSet::compile`]. The resulting program is replayed by
//! [`RoverMovements`], a forward-only cursor that yields the rover once as
//! spawned and once after every instruction.

use crate::error::{Error, Result};
use crate::rover::{Rover, RoverOp, RoverSnapshot};
use serde::Serialize;
use std::collections::HashMap;
use std::iter::FusedIterator;
use tracing::trace;

/// Character-to-operation table for movement lines.
#[derive(Clone, Debug, Default)]
pub struct InstructionSet {
    op_map: HashMap<char, RoverOp>,
}

impl InstructionSet {
    /// Creates an empty set. Every character is rejected until mapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// The conventional `M`/`L`/`R` alphabet.
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.populate_standard_symbols();
        set
    }

    /// Assigns `op` to `symbol` (builder pattern).
    pub fn with_op(mut self, symbol: char, op: RoverOp) -> Self {
        self.set_op(symbol, op);
        self
    }

    /// Assigns `op` to `symbol`, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: char, op: RoverOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers `M` (move), `L` (turn left) and `R` (turn right).
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('M', RoverOp::Move),
            ('L', RoverOp::TurnLeft),
            ('R', RoverOp::TurnRight),
        ];
        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    pub fn op(&self, symbol: char) -> Option<RoverOp> {
        self.op_map.get(&symbol).copied()
    }

    /// Decodes a full movement line.
    ///
    /// Every character is checked before anything is returned, so a bad
    /// character anywhere in the line rejects the whole line. An empty line
    /// compiles to an empty program.
    pub fn compile(&self, line: &str) -> Result<Vec<RoverOp>> {
        line.chars()
            .enumerate()
            .map(|(index, instruction)| {
                self.op(instruction)
                    .ok_or(Error::InvalidInstruction { instruction, index })
            })
            .collect()
    }
}

/// Forward-only cursor over a rover's movement program.
///
/// The first element is the rover as spawned; each later element is the
/// same rover after one more instruction. [`advance`](Self::advance) lends
/// the live rover, while the [`Iterator`] impl hands out copied
/// [`RoverSnapshot`]s. A failed move is reported once and ends the cursor,
/// leaving the rover at its last valid state.
#[derive(Debug)]
pub struct RoverMovements {
    rover: Rover,
    program: Vec<RoverOp>,
    /// Number of elements produced so far.
    produced: usize,
    failed: bool,
}

impl RoverMovements {
    pub fn new(rover: Rover, program: Vec<RoverOp>) -> Self {
        Self {
            rover,
            program,
            produced: 0,
            failed: false,
        }
    }

    /// Produces the next state, or `None` once the program is exhausted.
    pub fn advance(&mut self) -> Option<Result<&Rover>> {
        if self.is_exhausted() {
            return None;
        }

        let step = self.produced;
        self.produced += 1;

        if step > 0 {
            let op = self.program[step - 1];
            if let Err(err) = self.rover.apply(op).map(|_| ()) {
                self.failed = true;
                return Some(Err(err));
            }
            trace!(
                step,
                ?op,
                x = self.rover.x(),
                y = self.rover.y(),
                orientation = %self.rover.orientation(),
                "applied instruction"
            );
        }

        Some(Ok(&self.rover))
    }

    /// The rover in its most recently produced state.
    pub fn rover(&self) -> &Rover {
        &self.rover
    }

    pub fn program(&self) -> &[RoverOp] {
        &self.program
    }

    /// Elements still to be produced.
    pub fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            (self.program.len() + 1).saturating_sub(self.produced)
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Drains the cursor, keeping a copy of every state.
    pub fn run_to_end(self) -> Result<RoverTrack> {
        let snapshots = self.collect::<Result<Vec<_>>>()?;
        Ok(RoverTrack { snapshots })
    }
}

impl Iterator for RoverMovements {
    type Item = Result<RoverSnapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|state| state.map(Rover::snapshot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl FusedIterator for RoverMovements {}

/// Durable history of one rover, spawn state first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoverTrack {
    pub snapshots: Vec<RoverSnapshot>,
}

impl RoverTrack {
    pub fn initial_state(&self) -> Option<&RoverSnapshot> {
        self.snapshots.first()
    }

    pub fn final_state(&self) -> Option<&RoverSnapshot> {
        self.snapshots.last()
    }
}
