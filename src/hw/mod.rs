//! micro:bit v2 implementations of the game's hardware traits.

pub(crate) mod control;
pub(crate) mod display;
pub(crate) mod logger;
pub(crate) mod sound;
pub(crate) mod timer;

use microbit::hal::Rng;
use minebit::MineSource;

/// The nRF hardware random number generator.
pub(crate) struct HwRng(pub(crate) Rng);

impl MineSource for HwRng {
    fn next_u8(&mut self) -> u8 {
        self.0.random_u8()
    }
}
