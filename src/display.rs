use crate::error::Result;
use crate::game::CELLS;

/// What a single two-colour indicator shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Indicator {
    Off,
    /// First colour ("red"): blink phase one, and cells next to the mine.
    ColorA,
    /// Second colour ("green"): blink phase two, and cells clear of the mine.
    ColorB,
}

/// Nine addressable indicators, one per cell, indexed `row * 3 + col`.
pub trait IndicatorArray {
    fn set(&mut self, cell: usize, state: Indicator) -> Result<()>;

    fn clear(&mut self) -> Result<()> {
        for cell in 0..CELLS {
            self.set(cell, Indicator::Off)?;
        }
        Ok(())
    }
}

impl<T: IndicatorArray + ?Sized> IndicatorArray for &mut T {
    fn set(&mut self, cell: usize, state: Indicator) -> Result<()> {
        (**self).set(cell, state)
    }
}
