//! Play modes for the interactive session

use crate::{HanoiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a session advances; fixed for the lifetime of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// One planned move per user action
    #[default]
    Step,
    /// One planned move per timer tick
    Auto,
    /// The player moves discs directly; the plan is ignored
    Manual,
}

impl PlayMode {
    /// Does this mode replay the generated plan?
    pub fn follows_plan(&self) -> bool {
        !matches!(self, PlayMode::Manual)
    }
}

impl FromStr for PlayMode {
    type Err = HanoiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "step" => Ok(PlayMode::Step),
            "auto" => Ok(PlayMode::Auto),
            "manual" => Ok(PlayMode::Manual),
            _ => Err(HanoiError::ParseError(format!(
                "invalid play mode '{s}' (expected: step, auto, manual)"
            ))),
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayMode::Step => "step",
            PlayMode::Auto => "auto",
            PlayMode::Manual => "manual",
        };
        f.write_str(name)
    }
}
