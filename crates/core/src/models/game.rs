use std::fmt;

use chrono::{Local, NaiveDateTime, ParseResult, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::util::plural_suffix_for;

/// Format used for game timestamps, always with six fractional digits.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

const DATE_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// The character a player used in one game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameParticipant {
    /// Name of the participating player.
    pub player: String,
    /// Character the player used.
    pub character: String,
}

impl GameParticipant {
    /// Pair a player with the character they used.
    pub fn new(player: impl Into<String>, character: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            character: character.into(),
        }
    }
}

impl fmt::Display for GameParticipant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Participant {} used {}", self.player, self.character)
    }
}

/// Record of one completed game, identified by its timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// When the game was played, at microsecond precision.
    pub date: NaiveDateTime,
    /// Who played and with which character.
    #[serde(default)]
    pub participants: Vec<GameParticipant>,
}

impl Game {
    /// Create a game record; the date is truncated to microseconds.
    pub fn new(date: NaiveDateTime, participants: Vec<GameParticipant>) -> Self {
        Self {
            date: date.trunc_subsecs(6),
            participants,
        }
    }

    /// Game played right now, in local time.
    pub fn now(participants: Vec<GameParticipant>) -> Self {
        Self::new(Local::now().naive_local(), participants)
    }

    fn sorted_participants(&self) -> Vec<&GameParticipant> {
        let mut sorted: Vec<_> = self.participants.iter().collect();
        sorted.sort();
        sorted
    }
}

/// Render a timestamp the way game records store it.
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored game timestamp. The fractional part may be omitted.
pub fn parse_date(text: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), DATE_PARSE_FORMAT)
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.sorted_participants() == other.sorted_participants()
    }
}

impl Eq for Game {}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game on {} with {} participant{}",
            format_date(&self.date),
            self.participants.len(),
            plural_suffix_for(&self.participants)
        )
    }
}
