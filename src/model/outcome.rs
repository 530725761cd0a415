use std::fmt;

use crate::engine::error::PlayError;
use crate::model::dragon::Allocation;
use crate::model::knight::Knight;
use crate::model::stat::Weather;

pub const VICTORY: &str = "Victory";

/// How the game server judged a submitted solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Victory { message: Option<String> },
    Defeat { status: String, message: Option<String> },
}

impl Outcome {
    pub fn from_status(status: String, message: Option<String>) -> Self {
        if status == VICTORY {
            Outcome::Victory { message }
        } else {
            Outcome::Defeat { status, message }
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, Outcome::Victory { .. })
    }

    pub fn status(&self) -> &str {
        match self {
            Outcome::Victory { .. } => VICTORY,
            Outcome::Defeat { status, .. } => status,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Victory { message } | Outcome::Defeat { message, .. } => message.as_deref(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}: {}", self.status(), message),
            None => write!(f, "{}", self.status()),
        }
    }
}

/// What was learned about a game before it finished or failed.
#[derive(Debug, Clone, Default)]
pub struct PlayContext {
    pub game_id: Option<u64>,
    pub knight: Option<Knight>,
    pub weather: Option<Weather>,
    pub allocation: Option<Allocation>,
}

impl PlayContext {
    pub fn new(game_id: Option<u64>) -> Self {
        Self {
            game_id,
            ..Default::default()
        }
    }
}

/// One play of one game, with whatever context was gathered on the way.
#[derive(Debug)]
pub struct Attempt {
    pub context: PlayContext,
    pub result: Result<Outcome, PlayError>,
}

impl Attempt {
    pub fn is_victory(&self) -> bool {
        matches!(&self.result, Ok(outcome) if outcome.is_victory())
    }
}
