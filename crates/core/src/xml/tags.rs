#![allow(missing_docs)]

//! Element and attribute names used by the market document format.

use std::fmt;

/// Element names shared by readers and writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlElement {
    Banish,
    Banished,
    Buy,
    Character,
    Characters,
    Config,
    Game,
    GameAnte,
    Games,
    InitialDraft,
    Market,
    Name,
    Participants,
    Player,
    Players,
    Purse,
    Sell,
    StartCoins,
}

impl XmlElement {
    /// Tag spelling inside a document.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Banish => "banish",
            Self::Banished => "banished",
            Self::Buy => "buy",
            Self::Character => "character",
            Self::Characters => "characters",
            Self::Config => "config",
            Self::Game => "game",
            Self::GameAnte => "ante",
            Self::Games => "games",
            Self::InitialDraft => "draft",
            Self::Market => "market",
            Self::Name => "name",
            Self::Participants => "participants",
            Self::Player => "player",
            Self::Players => "players",
            Self::Purse => "purse",
            Self::Sell => "sell",
            Self::StartCoins => "start",
        }
    }
}

/// Attribute names shared by readers and writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlAttribute {
    Date,
    Player,
}

impl XmlAttribute {
    /// Attribute spelling inside a document.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Player => "player",
        }
    }
}

impl AsRef<str> for XmlElement {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for XmlAttribute {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for XmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for XmlAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
