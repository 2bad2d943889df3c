//! Move planner
//!
//! Produces the optimal move sequence for the three-peg puzzle with the
//! classic recursion: park n-1 discs on the spare peg, move the largest,
//! then bring the n-1 discs back on top of it.

use crate::core::types::{DiscId, Move, PegTriple, PlannedMove};
use crate::{HanoiError, Result};

/// Largest disc count `generate_plan` will materialise (2^24 - 1 moves)
///
/// Bigger puzzles can still be streamed through [`PlanIter`].
pub const MAX_PLANNED_DISCS: u32 = 24;

/// The ordered list of moves that solves a puzzle
pub type Plan = Vec<Move>;

/// Number of moves in the optimal solution for `n` discs (2^n - 1)
///
/// Returns `None` when the count does not fit in a u128.
pub fn move_count(n: u32) -> Option<u128> {
    match n {
        0 => Some(0),
        128 => Some(u128::MAX),
        n if n < 128 => Some((1u128 << n) - 1),
        _ => None,
    }
}

/// Generate the full plan for moving `n` discs as described by `pegs`
///
/// The result is a pure function of its inputs and always has exactly
/// 2^n - 1 entries.
pub fn generate_plan(n: u32, pegs: PegTriple) -> Result<Plan> {
    if n > MAX_PLANNED_DISCS {
        return Err(HanoiError::PlanTooLarge(n));
    }

    let mut plan = Vec::with_capacity((1usize << n) - 1);
    plan_recursive(n, pegs, &mut plan);
    Ok(plan)
}

fn plan_recursive(n: u32, pegs: PegTriple, plan: &mut Plan) {
    if n == 0 {
        return;
    }

    plan_recursive(n - 1, pegs.toward_auxiliary(), plan);
    plan.push(Move::new(pegs.source(), pegs.destination()));
    plan_recursive(n - 1, pegs.from_auxiliary(), plan);
}

/// Pending work on the explicit stack
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Solve a whole sub-problem of `n` discs
    Solve { n: u32, pegs: PegTriple },
    /// Emit the move of disc `n` itself
    Emit { n: u32, pegs: PegTriple },
}

/// Lazy, explicit-stack rendition of the planner
///
/// Yields the same moves in the same order as [`generate_plan`], each
/// annotated with the disc it carries. Memory use is O(n), so any disc
/// count can be streamed.
#[derive(Debug, Clone)]
pub struct PlanIter {
    stack: Vec<Frame>,
    remaining: Option<u128>,
}

impl PlanIter {
    pub fn new(n: u32, pegs: PegTriple) -> Self {
        let mut stack = Vec::with_capacity(n as usize * 2 + 1);
        if n > 0 {
            stack.push(Frame::Solve { n, pegs });
        }
        PlanIter {
            stack,
            remaining: move_count(n),
        }
    }

    /// Moves still to be yielded, if that number fits in a u128
    pub fn remaining(&self) -> Option<u128> {
        self.remaining
    }
}

impl Iterator for PlanIter {
    type Item = PlannedMove;

    fn next(&mut self) -> Option<PlannedMove> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit { n, pegs } => {
                    if let Some(left) = self.remaining.as_mut() {
                        *left = left.saturating_sub(1);
                    }
                    return Some(PlannedMove {
                        disc: DiscId::new(n),
                        from: pegs.source(),
                        to: pegs.destination(),
                    });
                }
                Frame::Solve { n, pegs } => {
                    // Pushed in reverse so the first half runs first
                    if n > 1 {
                        self.stack.push(Frame::Solve {
                            n: n - 1,
                            pegs: pegs.from_auxiliary(),
                        });
                    }
                    self.stack.push(Frame::Emit { n, pegs });
                    if n > 1 {
                        self.stack.push(Frame::Solve {
                            n: n - 1,
                            pegs: pegs.toward_auxiliary(),
                        });
                    }
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}
