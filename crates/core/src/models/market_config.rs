use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::plural_suffix;

/// Characters drafted per player when nothing else is configured.
pub const DEFAULT_DRAFT: i64 = 3;
/// Coins each player starts with.
pub const DEFAULT_INITIAL_PURSE: i64 = 3;
/// Coins paid into each game.
pub const DEFAULT_ANTE: i64 = 1;
/// Price of buying a character.
pub const DEFAULT_BUY_CHAR: i64 = 3;
/// Price of banishing a character.
pub const DEFAULT_BANISH_CHAR: i64 = 5;

/// Economic rules of a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Characters drafted per player.
    pub draft: i64,
    /// Coins each player starts with.
    pub initial_purse: i64,
    /// Coins paid into each game.
    pub ante: i64,
    /// Price of buying a character.
    pub buy_char: i64,
    /// Payout for selling a character; `None` means selling is not offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_char: Option<i64>,
    /// Price of banishing a character.
    pub banish_char: i64,
}

/// Partial configuration; unset fields fall back to the defaults.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub draft: Option<i64>,
    pub initial_purse: Option<i64>,
    pub ante: Option<i64>,
    pub buy_char: Option<i64>,
    pub sell_char: Option<i64>,
    pub banish_char: Option<i64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self::with_overrides(&ConfigOverrides::default())
    }
}

impl MarketConfig {
    /// Fill every unset field with its default. `sell_char` has no default.
    pub fn with_overrides(overrides: &ConfigOverrides) -> Self {
        Self {
            draft: overrides.draft.unwrap_or(DEFAULT_DRAFT),
            initial_purse: overrides.initial_purse.unwrap_or(DEFAULT_INITIAL_PURSE),
            ante: overrides.ante.unwrap_or(DEFAULT_ANTE),
            buy_char: overrides.buy_char.unwrap_or(DEFAULT_BUY_CHAR),
            sell_char: overrides.sell_char,
            banish_char: overrides.banish_char.unwrap_or(DEFAULT_BANISH_CHAR),
        }
    }
}

impl fmt::Display for MarketConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sell = self
            .sell_char
            .map(|coins| {
                format!(
                    " Sell characters for {} coin{},",
                    coins,
                    plural_suffix(coins)
                )
            })
            .unwrap_or_default();
        write!(
            f,
            "Game configuration: Draft {} character{}, Start with {} coin{}, Game ante is {}, \
             Buy characters for {} coin{},{} Banish characters for {} coin{}",
            self.draft,
            plural_suffix(self.draft),
            self.initial_purse,
            plural_suffix(self.initial_purse),
            self.ante,
            self.buy_char,
            plural_suffix(self.buy_char),
            sell,
            self.banish_char,
            plural_suffix(self.banish_char)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_use_defaults_but_sell_stays_absent() {
        let config = MarketConfig::default();
        assert_eq!(config.draft, 3);
        assert_eq!(config.initial_purse, 3);
        assert_eq!(config.ante, 1);
        assert_eq!(config.buy_char, 3);
        assert_eq!(config.banish_char, 5);
        assert_eq!(config.sell_char, None);

        let config = MarketConfig::with_overrides(&ConfigOverrides {
            draft: Some(5),
            sell_char: Some(0),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.draft, 5);
        assert_eq!(config.sell_char, Some(0));
        assert_eq!(config.ante, DEFAULT_ANTE);
    }

    #[test]
    fn display_mentions_sell_only_when_configured() {
        let config = MarketConfig::default();
        assert_eq!(
            config.to_string(),
            "Game configuration: Draft 3 characters, Start with 3 coins, Game ante is 1, \
             Buy characters for 3 coins, Banish characters for 5 coins"
        );

        let config = MarketConfig {
            sell_char: Some(1),
            ..config
        };
        assert!(config
            .to_string()
            .contains("Buy characters for 3 coins, Sell characters for 1 coin, Banish"));
    }
}
