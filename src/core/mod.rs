//! Core puzzle types and the move planner

pub mod plan;
pub mod types;

pub use plan::{generate_plan, move_count, Plan, PlanIter, MAX_PLANNED_DISCS};
pub use types::{DiscId, Move, PegId, PegTriple, PlannedMove};
