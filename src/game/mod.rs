//! Session state, replay and the pieces a front end drives it with

pub mod autoplay;
pub mod input;
pub mod logger;
pub mod mode;
pub mod move_log;
pub mod render;
pub mod report;
pub mod session;

pub use autoplay::{AutoPlayer, TickInterval};
pub use input::{
    parse_auto_command, parse_disc_count, parse_manual_move, parse_solver_disc_count,
    solver_disc_count, AutoCommand, DiscCountBounds, ManualCommand,
};
pub use logger::{LogEntry, OutputFormat, OutputMode, SessionLogger, VerbosityLevel};
pub use mode::PlayMode;
pub use move_log::{MoveLog, MoveLogEntry};
pub use session::{MoveRejection, ReplayPhase, Session, StepOutcome};
