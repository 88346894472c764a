//! Shared domain models.

mod game;
mod market_config;
mod player;

pub use game::{format_date, parse_date, Game, GameParticipant, DATE_FORMAT};
pub use market_config::{
    ConfigOverrides, MarketConfig, DEFAULT_ANTE, DEFAULT_BANISH_CHAR, DEFAULT_BUY_CHAR,
    DEFAULT_DRAFT, DEFAULT_INITIAL_PURSE,
};
pub use player::Player;
