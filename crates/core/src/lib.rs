#![warn(clippy::all, missing_docs)]

//! Core domain logic for the market tracker.
//!
//! This crate hosts the player, configuration and game record models
//! together with their XML document encoding and the application
//! settings used by any frontend.

pub mod config;
pub mod models;
pub mod util;
pub mod xml;

pub use config::AppConfig;
pub use models::{ConfigOverrides, Game, GameParticipant, MarketConfig, Player};
pub use xml::{Node, XmlAspect, XmlError};
