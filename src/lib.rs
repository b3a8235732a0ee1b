//! A one-mine minesweeper played on a 3x3 grid of two-colour indicators.
//!
//! The cells blink one at a time at a speed set by an analog input. The "advance" button skips
//! the blinking cell, the "reveal" button selects it: a revealed cell shows [`ColorA`] if it
//! touches the mine and [`ColorB`] otherwise. Revealing all eight safe cells wins; revealing the
//! mine loses and sounds the alarm. A mode switch starts rounds and pauses them.
//!
//! The crate only holds the game. The hardware is reached through [`IndicatorArray`],
//! [`InputSampler`], [`Buzzer`], [`MineSource`] and [`TickSource`], which the firmware binary
//! implements for the micro:bit.
//!
//! [`ColorA`]: display::Indicator::ColorA
//! [`ColorB`]: display::Indicator::ColorB

#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod config;
pub mod control;
pub mod display;
pub mod engine;
pub mod error;
pub mod game;
pub mod sound;
pub mod ticks;

#[cfg(test)]
mod sim;

pub use crate::config::Config;
pub use crate::control::{InputSampler, Level};
pub use crate::display::{Indicator, IndicatorArray};
pub use crate::engine::{GameEngine, RoundReport};
pub use crate::error::{Error, Result};
pub use crate::game::{MineSource, Outcome};
pub use crate::sound::Buzzer;
pub use crate::ticks::{TickSource, Ticks};
