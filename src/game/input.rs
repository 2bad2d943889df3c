//! Parsing of user-typed input: disc counts and manual-mode commands

use crate::core::{DiscId, PegId};
use crate::game::autoplay::TickInterval;
use crate::{HanoiError, Result};

/// Inclusive range of accepted disc counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscCountBounds {
    pub min: u32,
    pub max: u32,
}

impl DiscCountBounds {
    /// Range offered by the interactive player
    pub const INTERACTIVE: DiscCountBounds = DiscCountBounds { min: 3, max: 10 };

    pub fn check(&self, value: i64) -> Result<u32> {
        if value < self.min as i64 || value > self.max as i64 {
            return Err(HanoiError::InvalidDiscCount {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value as u32)
    }
}

fn parse_whole_number(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| HanoiError::ParseError(format!("'{trimmed}' is not a whole number")))
}

/// Parse a disc count typed by the user and check it against `bounds`
pub fn parse_disc_count(text: &str, bounds: DiscCountBounds) -> Result<u32> {
    bounds.check(parse_whole_number(text)?)
}

/// Disc count for the console solver
///
/// Every whole number is accepted. Zero or less leaves nothing to move.
pub fn solver_disc_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Parse a disc count for the console solver; only non-numbers are refused
pub fn parse_solver_disc_count(text: &str) -> Result<u32> {
    parse_whole_number(text).map(solver_disc_count)
}

/// A command typed in manual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualCommand {
    Move { disc: DiscId, from: PegId, to: PegId },
    Help,
    Quit,
}

/// Parse a manual-mode line
///
/// Format: `<disc> <from> <to>`, where pegs are `A`/`B`/`C`, `1`/`2`/`3`
/// or `rod1`..`rod3`. Commas may separate the fields.
pub fn parse_manual_move(text: &str) -> Result<ManualCommand> {
    let lowered = text.trim().to_lowercase();
    match lowered.as_str() {
        "q" | "quit" | "exit" => return Ok(ManualCommand::Quit),
        "?" | "h" | "help" => return Ok(ManualCommand::Help),
        _ => {}
    }

    let parts: Vec<&str> = lowered
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 {
        return Err(HanoiError::ParseError(format!(
            "invalid move '{}' (expected: <disc> <from> <to>)",
            text.trim()
        )));
    }

    let disc = parts[0]
        .parse::<u32>()
        .ok()
        .filter(|&d| d > 0)
        .ok_or_else(|| HanoiError::ParseError(format!("invalid disc '{}'", parts[0])))?;

    Ok(ManualCommand::Move {
        disc: DiscId::new(disc),
        from: parse_peg(parts[1])?,
        to: parse_peg(parts[2])?,
    })
}

/// Parse a peg reference (`a`, `1`, `rod1`, ...)
pub fn parse_peg(text: &str) -> Result<PegId> {
    let s = text.trim().to_lowercase();
    let s = s
        .strip_prefix("rod")
        .or_else(|| s.strip_prefix("peg"))
        .unwrap_or(s.as_str());

    match s {
        "a" | "1" => Ok(PegId::FIRST),
        "b" | "2" => Ok(PegId::SECOND),
        "c" | "3" => Ok(PegId::THIRD),
        _ => Err(HanoiError::ParseError(format!(
            "invalid peg '{text}' (expected: A/B/C or 1/2/3)"
        ))),
    }
}

/// A command typed while auto-play is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoCommand {
    Faster,
    Slower,
    SetInterval(TickInterval),
    Stop,
}

/// Parse an auto-play speed command
///
/// `+` speeds up, `-` slows down, a number (optionally suffixed `ms`) sets
/// the delay and `q` stops.
pub fn parse_auto_command(text: &str) -> Result<AutoCommand> {
    let lowered = text.trim().to_lowercase();
    match lowered.as_str() {
        "+" | "f" | "faster" => return Ok(AutoCommand::Faster),
        "-" | "s" | "slower" => return Ok(AutoCommand::Slower),
        "q" | "quit" | "stop" => return Ok(AutoCommand::Stop),
        _ => {}
    }

    let digits = lowered.strip_suffix("ms").unwrap_or(&lowered).trim_end();
    let ms = digits.parse::<u64>().map_err(|_| {
        HanoiError::ParseError(format!(
            "invalid command '{}' (expected: +, -, <milliseconds> or q)",
            text.trim()
        ))
    })?;
    Ok(AutoCommand::SetInterval(TickInterval::new(ms)?))
}
