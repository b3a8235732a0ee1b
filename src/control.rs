use crate::error::Result;
use crate::ticks::{wait_until, Counter, TickSource};

/// Raw electrical level of a button or switch. The inputs are active-low: a pressed button or a
/// switch in the "on" position reads [`Level::Low`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn is_asserted(self) -> bool {
        self == Level::Low
    }
}

impl From<bool> for Level {
    /// `true` is a high level.
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// The player's inputs.
pub trait InputSampler {
    /// Sample the speed control, 0..=255.
    fn read_analog(&mut self) -> Result<u8>;
    /// "Advance" button: skip the blinking cell.
    fn advance(&mut self) -> Result<Level>;
    /// "Reveal" button: select the blinking cell.
    fn reveal(&mut self) -> Result<Level>;
    /// Mode switch: on starts a round, off pauses one.
    fn mode(&mut self) -> Result<Level>;
}

impl<T: InputSampler + ?Sized> InputSampler for &mut T {
    fn read_analog(&mut self) -> Result<u8> {
        (**self).read_analog()
    }

    fn advance(&mut self) -> Result<Level> {
        (**self).advance()
    }

    fn reveal(&mut self) -> Result<Level> {
        (**self).reveal()
    }

    fn mode(&mut self) -> Result<Level> {
        (**self).mode()
    }
}

/// Settle delay masking contact bounce before a button level is trusted again.
pub struct Debouncer<'t, T: ?Sized> {
    ticks: &'t T,
    settle_ticks: u32,
}

impl<'t, T: TickSource + ?Sized> Debouncer<'t, T> {
    pub fn new(ticks: &'t T, settle_ticks: u32) -> Self {
        Debouncer {
            ticks,
            settle_ticks,
        }
    }

    /// Restart the debounce counter and block until the settle delay has elapsed.
    pub fn wait_stable(&self) {
        self.ticks.reset(Counter::Debounce);
        wait_until(self.ticks, Counter::Debounce, self.settle_ticks);
    }
}
