//! Peg state and replay engine
//!
//! A `Session` owns everything about one game: the pegs, the plan, the
//! cursor into the plan and the move log. Front ends hold a session and
//! drive it through these methods; nothing here knows about display.

use crate::core::{generate_plan, DiscId, Move, PegId, PegTriple, Plan};
use crate::game::move_log::{MoveLog, MoveLogEntry};
use crate::pegs::Pegs;
use crate::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of asking for the next planned move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The move was applied and logged
    Applied(MoveLogEntry),
    /// The source peg was empty; the cursor advanced without moving anything
    Skipped(Move),
    /// The cursor is already at the end of the plan; nothing changed
    PlanExhausted,
}

/// Why a manual move was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("source and destination are the same peg")]
    SamePeg,

    #[error("peg {0} is empty")]
    SourceEmpty(PegId),

    #[error("disc {disc} is not on top of peg {peg}")]
    NotOnTop { disc: DiscId, peg: PegId },

    #[error("disc {disc} cannot rest on smaller disc {top}")]
    LargerOnSmaller { disc: DiscId, top: DiscId },
}

/// Where the cursor sits relative to the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplayPhase {
    Ready,
    InProgress,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    disc_count: u32,
    pegs: Pegs,
    plan: Plan,
    cursor: usize,
    move_log: MoveLog,
}

impl Session {
    /// Start a session with `disc_count` discs on the first peg
    pub fn new(disc_count: u32) -> Result<Self> {
        let mut session = Session {
            disc_count: 0,
            pegs: Pegs::empty(),
            plan: Plan::new(),
            cursor: 0,
            move_log: MoveLog::new(),
        };
        session.initialize(disc_count)?;
        Ok(session)
    }

    /// Reset pegs, regenerate the plan, rewind the cursor and clear the log
    ///
    /// Any count up to `MAX_PLANNED_DISCS` (24) succeeds. Larger counts fail
    /// with `HanoiError::PlanTooLarge` and leave the session unchanged.
    pub fn initialize(&mut self, disc_count: u32) -> Result<()> {
        let plan = generate_plan(disc_count, PegTriple::STANDARD)?;

        self.disc_count = disc_count;
        self.pegs = Pegs::stacked(disc_count, PegTriple::STANDARD.source());
        self.plan = plan;
        self.cursor = 0;
        self.move_log.clear();
        Ok(())
    }

    /// Apply the move at the cursor
    ///
    /// An empty source peg (only possible after manual interference) skips
    /// the planned move but still advances the cursor.
    pub fn apply_next_planned_move(&mut self) -> StepOutcome {
        let Some(&planned) = self.plan.get(self.cursor) else {
            return StepOutcome::PlanExhausted;
        };
        self.cursor += 1;

        match self.pegs.transfer(planned.from, planned.to) {
            Some(disc) => {
                let entry = MoveLogEntry {
                    disc,
                    from: planned.from,
                    to: planned.to,
                };
                self.move_log.record(entry);
                StepOutcome::Applied(entry)
            }
            None => StepOutcome::Skipped(planned),
        }
    }

    /// Move `disc` from `from` to `to` if the rules allow it
    ///
    /// Manual moves bypass the plan: neither the cursor nor the move log
    /// changes. A rejected move leaves the pegs untouched.
    pub fn apply_manual_move(
        &mut self,
        disc: DiscId,
        from: PegId,
        to: PegId,
    ) -> std::result::Result<(), MoveRejection> {
        if from == to {
            return Err(MoveRejection::SamePeg);
        }

        let Some(top) = self.pegs.top(from) else {
            return Err(MoveRejection::SourceEmpty(from));
        };
        if top != disc {
            return Err(MoveRejection::NotOnTop { disc, peg: from });
        }
        if let Some(dest_top) = self.pegs.top(to) {
            if dest_top <= disc {
                return Err(MoveRejection::LargerOnSmaller { disc, top: dest_top });
            }
        }

        self.pegs.transfer(from, to);
        Ok(())
    }

    /// Apply every remaining planned move; returns how many were applied
    pub fn run_to_completion(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.apply_next_planned_move() {
                StepOutcome::Applied(_) => applied += 1,
                StepOutcome::Skipped(_) => {}
                StepOutcome::PlanExhausted => return applied,
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.plan.len()
    }

    pub fn phase(&self) -> ReplayPhase {
        if self.is_complete() {
            ReplayPhase::Complete
        } else if self.cursor == 0 {
            ReplayPhase::Ready
        } else {
            ReplayPhase::InProgress
        }
    }

    /// True when the last peg holds every disc, whatever route got it there
    pub fn all_on_target(&self) -> bool {
        self.pegs.get(PegTriple::STANDARD.destination()).len() == self.disc_count as usize
    }

    pub fn disc_count(&self) -> u32 {
        self.disc_count
    }

    pub fn pegs(&self) -> &Pegs {
        &self.pegs
    }

    pub fn plan(&self) -> &[Move] {
        &self.plan
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_log(&self) -> &MoveLog {
        &self.move_log
    }

    pub fn next_planned_move(&self) -> Option<Move> {
        self.plan.get(self.cursor).copied()
    }

    pub fn top_disc(&self, peg: PegId) -> Option<DiscId> {
        self.pegs.top(peg)
    }

    pub fn verify_invariants(&self) -> Result<()> {
        self.pegs.verify(self.disc_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_PLANNED_DISCS;
    use crate::HanoiError;

    const A: PegId = PegId::FIRST;
    const B: PegId = PegId::SECOND;
    const C: PegId = PegId::THIRD;

    fn disc(n: u32) -> DiscId {
        DiscId::new(n)
    }

    #[test]
    fn test_new_session_is_ready() {
        let session = Session::new(3).unwrap();
        assert_eq!(session.phase(), ReplayPhase::Ready);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.plan().len(), 7);
        assert_eq!(session.pegs().get(A).top_down(), vec![1, 2, 3]);
        assert!(session.move_log().is_empty());
    }

    #[test]
    fn test_step_logs_move() {
        let mut session = Session::new(3).unwrap();
        let outcome = session.apply_next_planned_move();
        let StepOutcome::Applied(entry) = outcome else {
            panic!("expected an applied move, got {outcome:?}");
        };
        assert_eq!(entry.to_string(), "Move 1 from Rod 1 to Rod 3");
        assert_eq!(session.phase(), ReplayPhase::InProgress);
        assert_eq!(session.move_log().len(), 1);
    }

    #[test]
    fn test_exhausted_plan_is_a_no_op() {
        let mut session = Session::new(1).unwrap();
        assert!(matches!(
            session.apply_next_planned_move(),
            StepOutcome::Applied(_)
        ));
        assert!(session.is_complete());

        let before = session.clone();
        assert_eq!(session.apply_next_planned_move(), StepOutcome::PlanExhausted);
        assert_eq!(session, before);
    }

    #[test]
    fn test_skip_on_empty_source() {
        let mut session = Session::new(3).unwrap();
        // Empty peg A by hand so the first planned move (A -> C) has nothing to carry
        session.apply_manual_move(disc(1), A, B).unwrap();
        session.apply_manual_move(disc(2), A, C).unwrap();
        session.apply_manual_move(disc(1), B, C).unwrap();
        session.apply_manual_move(disc(3), A, B).unwrap();

        let outcome = session.apply_next_planned_move();
        assert_eq!(outcome, StepOutcome::Skipped(Move::new(A, C)));
        assert_eq!(session.cursor(), 1);
        assert!(session.move_log().is_empty());
    }

    #[test]
    fn test_manual_move_rules() {
        let mut session = Session::new(3).unwrap();

        assert_eq!(
            session.apply_manual_move(disc(2), A, B),
            Err(MoveRejection::NotOnTop { disc: disc(2), peg: A })
        );
        assert_eq!(
            session.apply_manual_move(disc(1), B, C),
            Err(MoveRejection::SourceEmpty(B))
        );
        assert_eq!(
            session.apply_manual_move(disc(1), A, A),
            Err(MoveRejection::SamePeg)
        );

        // disc 1 onto an empty peg
        assert!(session.apply_manual_move(disc(1), A, C).is_ok());
        // disc 2 onto a peg topped by 1 is refused
        assert_eq!(
            session.apply_manual_move(disc(2), A, C),
            Err(MoveRejection::LargerOnSmaller { disc: disc(2), top: disc(1) })
        );
        assert!(session.apply_manual_move(disc(2), A, B).is_ok());
        // disc 1 onto a peg topped by 2
        assert!(session.apply_manual_move(disc(1), C, B).is_ok());

        // Manual moves never touch the cursor or log
        assert_eq!(session.cursor(), 0);
        assert!(session.move_log().is_empty());
        session.verify_invariants().unwrap();
    }

    #[test]
    fn test_rejection_leaves_state_unchanged() {
        let mut session = Session::new(3).unwrap();
        session.apply_manual_move(disc(1), A, B).unwrap();
        session.apply_manual_move(disc(2), A, C).unwrap();
        let before = session.clone();

        // disc 3 onto a peg topped by 2
        assert!(session.apply_manual_move(disc(3), A, C).is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_initialize_resets_everything() {
        let mut session = Session::new(4).unwrap();
        session.apply_next_planned_move();
        session.apply_next_planned_move();

        session.initialize(4).unwrap();
        assert_eq!(session, Session::new(4).unwrap());
        assert_eq!(session.phase(), ReplayPhase::Ready);
    }

    #[test]
    fn test_initialize_refuses_oversized_plan() {
        let mut session = Session::new(3).unwrap();
        session.apply_next_planned_move();
        let before = session.clone();

        assert!(matches!(
            session.initialize(MAX_PLANNED_DISCS + 1),
            Err(HanoiError::PlanTooLarge(25))
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn test_zero_discs_start_complete() {
        let mut session = Session::new(0).unwrap();
        assert_eq!(session.phase(), ReplayPhase::Complete);
        assert_eq!(session.apply_next_planned_move(), StepOutcome::PlanExhausted);
    }

    #[test]
    fn test_run_to_completion() {
        let mut session = Session::new(5).unwrap();
        assert_eq!(session.run_to_completion(), 31);
        assert!(session.all_on_target());
        assert_eq!(session.move_log().len(), 31);
    }
}
