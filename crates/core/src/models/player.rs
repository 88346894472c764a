use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::{plural_suffix, plural_suffix_for, same_members};

/// A market participant with a purse and drafted characters.
///
/// Character lists keep draft order, but equality treats them as sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    /// Unique name within a market.
    pub name: String,
    /// Coins currently held.
    pub purse: i64,
    /// Owned characters in the order they were drafted.
    #[serde(default)]
    pub characters: Vec<String>,
    /// Characters this player has banished.
    #[serde(default)]
    pub banished: Vec<String>,
}

impl Player {
    /// Player without characters.
    pub fn new(name: impl Into<String>, purse: i64) -> Self {
        Self {
            name: name.into(),
            purse,
            characters: Vec::new(),
            banished: Vec::new(),
        }
    }

    /// Replace the owned characters, keeping the given order.
    pub fn with_characters<I, T>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.characters = characters.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the banished characters.
    pub fn with_banished<I, T>(mut self, banished: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.banished = banished.into_iter().map(Into::into).collect();
        self
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.purse == other.purse
            && same_members(&self.characters, &other.characters)
            && same_members(&self.banished, &other.banished)
    }
}

impl Eq for Player {}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {} has {} coin{} has character{}: {} and banished: {}",
            self.name,
            self.purse,
            plural_suffix(self.purse),
            plural_suffix_for(&self.characters),
            self.characters.join(", "),
            self.banished.join(", ")
        )
    }
}
