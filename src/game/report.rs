//! Log lines for session events, shared by every play mode

use crate::core::{DiscId, PegId};
use crate::game::logger::{SessionLogger, VerbosityLevel};
use crate::game::render::render_pegs;
use crate::game::session::{MoveRejection, Session, StepOutcome};
use crate::Result;

/// Draw the pegs at Normal level, one log line per row
pub fn show_pegs(logger: &SessionLogger, session: &Session) {
    for line in render_pegs(session.pegs()).lines() {
        logger.normal(line);
    }
}

/// Report a planned step; returns true once the plan is finished
///
/// Debug builds re-check the peg invariants after every step.
pub fn report_step(
    logger: &SessionLogger,
    session: &Session,
    outcome: StepOutcome,
) -> Result<bool> {
    match outcome {
        StepOutcome::Applied(entry) => {
            logger.categorized(VerbosityLevel::Normal, "move", &entry.to_string());
        }
        StepOutcome::Skipped(planned) => {
            logger.categorized(
                VerbosityLevel::Verbose,
                "skip",
                &format!("Skipped planned move {} (source peg empty)", planned),
            );
        }
        StepOutcome::PlanExhausted => {}
    }

    if cfg!(debug_assertions) {
        session.verify_invariants()?;
    }

    if session.is_complete() {
        logger.normal(&format!("Puzzle solved in {} moves", session.move_log().len()));
        return Ok(true);
    }
    Ok(false)
}

/// Report a manual move attempt
pub fn report_manual_move(
    logger: &SessionLogger,
    disc: DiscId,
    from: PegId,
    to: PegId,
    result: &std::result::Result<(), MoveRejection>,
) {
    match result {
        Ok(()) => logger.categorized(
            VerbosityLevel::Normal,
            "manual",
            &format!(
                "Moved disc {} from Rod {} to Rod {}",
                disc,
                from.rod_number(),
                to.rod_number()
            ),
        ),
        Err(rejection) => logger.categorized(
            VerbosityLevel::Normal,
            "rejected",
            &format!("Move rejected: {}", rejection),
        ),
    }
}

/// Report auto-play halting before the plan ran out
pub fn report_stopped(logger: &SessionLogger, session: &Session) {
    logger.normal(&format!(
        "Stopped after {} of {} moves",
        session.cursor(),
        session.plan().len()
    ));
}
