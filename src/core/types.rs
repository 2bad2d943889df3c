//! Strongly-typed wrappers for puzzle concepts
//!
//! Pegs and discs are both small integers, so they get distinct newtypes
//! that cannot be mixed up at call sites.

use crate::{HanoiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three pegs (rods), indexed 0, 1, 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PegId(u8);

impl PegId {
    pub const FIRST: PegId = PegId(0);
    pub const SECOND: PegId = PegId(1);
    pub const THIRD: PegId = PegId(2);

    /// All pegs in index order
    pub const ALL: [PegId; 3] = [PegId::FIRST, PegId::SECOND, PegId::THIRD];

    /// Checked constructor; rejects indices outside 0..3
    pub fn new(index: usize) -> Result<Self> {
        if index < 3 {
            Ok(PegId(index as u8))
        } else {
            Err(HanoiError::InvalidPeg(index))
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Single-letter console label (A, B, C)
    pub fn letter(&self) -> char {
        (b'A' + self.0) as char
    }

    /// 1-based rod number used in the move log
    pub fn rod_number(&self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<usize> for PegId {
    type Error = HanoiError;

    fn try_from(index: usize) -> Result<Self> {
        PegId::new(index)
    }
}

impl From<PegId> for usize {
    fn from(peg: PegId) -> usize {
        peg.index()
    }
}

/// A disc, identified by its size (1 is the smallest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscId(u32);

impl DiscId {
    pub fn new(size: u32) -> Self {
        DiscId(size)
    }

    pub fn size(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DiscId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Move the top disc of `from` onto `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: PegId,
    pub to: PegId,
}

impl Move {
    pub fn new(from: PegId, to: PegId) -> Self {
        Move { from, to }
    }

    /// Index pair, handy for comparing against literal sequences
    pub fn as_pair(&self) -> (usize, usize) {
        (self.from.index(), self.to.index())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A planned move annotated with the disc it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlannedMove {
    pub disc: DiscId,
    pub from: PegId,
    pub to: PegId,
}

impl PlannedMove {
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl fmt::Display for PlannedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move disc {} from {} to {}", self.disc, self.from, self.to)
    }
}

/// Source, destination and auxiliary pegs for one planning call
///
/// The three pegs are guaranteed distinct, including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPegTriple")]
pub struct PegTriple {
    source: PegId,
    destination: PegId,
    auxiliary: PegId,
}

impl PegTriple {
    /// The root triple every session plans with: 0 -> 2 via 1
    pub const STANDARD: PegTriple = PegTriple {
        source: PegId::FIRST,
        destination: PegId::THIRD,
        auxiliary: PegId::SECOND,
    };

    pub fn new(source: PegId, destination: PegId, auxiliary: PegId) -> Result<Self> {
        if source == destination || source == auxiliary {
            return Err(HanoiError::DuplicatePeg(source));
        }
        if destination == auxiliary {
            return Err(HanoiError::DuplicatePeg(destination));
        }
        Ok(PegTriple {
            source,
            destination,
            auxiliary,
        })
    }

    pub fn source(&self) -> PegId {
        self.source
    }

    pub fn destination(&self) -> PegId {
        self.destination
    }

    pub fn auxiliary(&self) -> PegId {
        self.auxiliary
    }

    /// Sub-problem triple for the first recursive half (source -> auxiliary)
    pub(crate) fn toward_auxiliary(&self) -> Self {
        PegTriple {
            source: self.source,
            destination: self.auxiliary,
            auxiliary: self.destination,
        }
    }

    /// Sub-problem triple for the second recursive half (auxiliary -> destination)
    pub(crate) fn from_auxiliary(&self) -> Self {
        PegTriple {
            source: self.auxiliary,
            destination: self.destination,
            auxiliary: self.source,
        }
    }
}

/// Unchecked wire form of `PegTriple`
#[derive(Deserialize)]
struct RawPegTriple {
    source: PegId,
    destination: PegId,
    auxiliary: PegId,
}

impl TryFrom<RawPegTriple> for PegTriple {
    type Error = HanoiError;

    fn try_from(raw: RawPegTriple) -> Result<Self> {
        PegTriple::new(raw.source, raw.destination, raw.auxiliary)
    }
}

impl Default for PegTriple {
    fn default() -> Self {
        PegTriple::STANDARD
    }
}
