//! Timing calibration for the game.
//!
//! Every duration in the game is counted in ticks of the hardware tick source. The values were
//! calibrated against a 16-bit timer overflowing from a 22.1184 MHz clock, which gives
//! 22_118_400 / 65_536 = 337.5 ticks per second.

/// Rate of the hardware tick source.
pub const TICKS_PER_SECOND: f32 = 337.5;

/// Tick period the board timer is programmed with, in microseconds (1e6 / 337.5, rounded).
pub const TICK_PERIOD_US: u32 = 2963;

/// Settle delay applied after a button is seen pressed (~187 ms).
pub const DEBOUNCE_TICKS: u32 = 63;

/// Length of the loss alarm (4 s).
pub const ALARM_TICKS: u32 = 1350;

/// Largest value the analog input can report.
pub const ANALOG_MAX: u8 = 255;

/// Shortest blink period, as a fraction of one second.
pub const PERIOD_FLOOR: f32 = 0.05;

/// Range the analog input spans on top of [`PERIOD_FLOOR`], as a fraction of one second.
pub const PERIOD_SPAN: f32 = 0.95;

/// Timing parameters handed to the game engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    pub ticks_per_second: f32,
    pub debounce_ticks: u32,
    pub alarm_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ticks_per_second: TICKS_PER_SECOND,
            debounce_ticks: DEBOUNCE_TICKS,
            alarm_ticks: ALARM_TICKS,
        }
    }
}

impl Config {
    /// Full blink period (both colour phases) for an analog sample. A sample of 0 gives the
    /// fastest blink (~17 ticks) and 255 the slowest (~338 ticks).
    pub fn blink_period(&self, sample: u8) -> u32 {
        let fraction = (sample as f32 / ANALOG_MAX as f32) * PERIOD_SPAN + PERIOD_FLOOR;
        libm::roundf(fraction * self.ticks_per_second) as u32
    }

    /// Convert a tick count into whole seconds, truncating.
    pub fn seconds(&self, ticks: u32) -> u32 {
        (ticks as f32 / self.ticks_per_second) as u32
    }
}
