//! Peg stacks
//!
//! Each peg stores its discs bottom-to-top, so the top disc is the last
//! element. Stacks hold up to 16 discs inline before spilling to the heap.

use crate::core::{DiscId, PegId};
use crate::{HanoiError, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single peg holding a stack of discs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peg {
    /// Which peg this is
    pub id: PegId,

    /// Discs from bottom (index 0) to top (last)
    pub discs: SmallVec<[DiscId; 16]>,
}

impl Peg {
    pub fn new(id: PegId) -> Self {
        Peg {
            id,
            discs: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Look at the top disc without removing it
    pub fn top(&self) -> Option<DiscId> {
        self.discs.last().copied()
    }

    /// Take the top disc off
    pub fn pop(&mut self) -> Option<DiscId> {
        self.discs.pop()
    }

    /// Place a disc on top, with no ordering check
    pub fn push(&mut self, disc: DiscId) {
        self.discs.push(disc);
    }

    /// Would `disc` be allowed to rest on this peg?
    pub fn accepts(&self, disc: DiscId) -> bool {
        self.top().map_or(true, |top| top > disc)
    }

    /// Disc sizes from top to bottom
    pub fn top_down(&self) -> Vec<u32> {
        self.discs.iter().rev().map(DiscId::size).collect()
    }

    pub fn clear(&mut self) {
        self.discs.clear();
    }
}

/// The three pegs of one puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pegs {
    pegs: [Peg; 3],
}

impl Pegs {
    /// All pegs empty
    pub fn empty() -> Self {
        Pegs {
            pegs: PegId::ALL.map(Peg::new),
        }
    }

    /// Starting position: discs 1..=n stacked on `start`, largest at the bottom
    pub fn stacked(n: u32, start: PegId) -> Self {
        let mut pegs = Pegs::empty();
        for size in (1..=n).rev() {
            pegs.get_mut(start).push(DiscId::new(size));
        }
        pegs
    }

    pub fn get(&self, peg: PegId) -> &Peg {
        &self.pegs[peg.index()]
    }

    pub fn get_mut(&mut self, peg: PegId) -> &mut Peg {
        &mut self.pegs[peg.index()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Peg> {
        self.pegs.iter()
    }

    pub fn top(&self, peg: PegId) -> Option<DiscId> {
        self.get(peg).top()
    }

    /// Pop from `from` and push onto `to`; returns the moved disc
    pub fn transfer(&mut self, from: PegId, to: PegId) -> Option<DiscId> {
        let disc = self.get_mut(from).pop()?;
        self.get_mut(to).push(disc);
        Some(disc)
    }

    /// Check disc ownership and ordering for an `n`-disc puzzle
    ///
    /// Every disc 1..=n must sit on exactly one peg, and each stack must
    /// shrink strictly from bottom to top.
    pub fn verify(&self, n: u32) -> Result<()> {
        let mut seen: FxHashSet<DiscId> = FxHashSet::default();

        for peg in &self.pegs {
            for pair in peg.discs.windows(2) {
                if pair[1] >= pair[0] {
                    return Err(HanoiError::InvariantViolation(format!(
                        "disc {} rests on disc {} on peg {}",
                        pair[1], pair[0], peg.id
                    )));
                }
            }
            for &disc in &peg.discs {
                if disc.size() == 0 || disc.size() > n {
                    return Err(HanoiError::InvariantViolation(format!(
                        "unknown disc {} on peg {}",
                        disc, peg.id
                    )));
                }
                if !seen.insert(disc) {
                    return Err(HanoiError::InvariantViolation(format!(
                        "disc {} appears more than once",
                        disc
                    )));
                }
            }
        }

        if seen.len() != n as usize {
            return Err(HanoiError::InvariantViolation(format!(
                "{} of {} discs are on the pegs",
                seen.len(),
                n
            )));
        }
        Ok(())
    }
}

impl Default for Pegs {
    fn default() -> Self {
        Pegs::empty()
    }
}
