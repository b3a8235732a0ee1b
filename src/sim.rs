//! Host-side stand-ins for the board, used by the unit tests.
//!
//! Time is driven by the game loop itself: every call to [`TickSource::idle`] on a [`SimClock`] is
//! one hardware tick. The wall clock keeps running while the tick source is disabled, so scripted
//! inputs are keyed on wall time.

use std::cell::{Cell, RefCell};
use std::ops::Range;
use std::sync::Once;

use log::{LevelFilter, Log, Metadata, Record};

use crate::control::{InputSampler, Level};
use crate::display::{Indicator, IndicatorArray};
use crate::error::Result;
use crate::game::{MineSource, CELLS};
use crate::sound::Buzzer;
use crate::ticks::{Counter, TickSource, Ticks};

/// Give up on a test that never finishes its round.
const WALL_LIMIT: u32 = 100_000;

/// How long a scripted press holds its button down. Shorter than the debounce delay.
const HOLD: u32 = 40;

/// Spacing between scripted presses.
const GAP: u32 = 200;

pub struct SimClock {
    ticks: Ticks,
    wall: Cell<u32>,
}

impl SimClock {
    pub fn new() -> Self {
        SimClock {
            ticks: Ticks::new(),
            wall: Cell::new(0),
        }
    }

    pub fn wall(&self) -> u32 {
        self.wall.get()
    }

    pub fn advance(&self, ticks: u32) {
        for _ in 0..ticks {
            self.idle();
        }
    }
}

impl TickSource for SimClock {
    fn read(&self, counter: Counter) -> u32 {
        self.ticks.read(counter)
    }

    fn reset(&self, counter: Counter) {
        self.ticks.reset(counter)
    }

    fn enable(&self) {
        self.ticks.enable()
    }

    fn disable(&self) {
        self.ticks.disable()
    }

    fn idle(&self) {
        let wall = self.wall.get() + 1;
        assert!(wall < WALL_LIMIT, "simulation ran away");
        self.wall.set(wall);
        self.ticks.on_interrupt();
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Button {
    Advance,
    Reveal,
}

/// Inputs following a script. The mode switch is on and the analog input reads 0 unless told
/// otherwise.
pub struct ScriptedControls<'c> {
    clock: &'c SimClock,
    analog: u8,
    advance: Vec<Range<u32>>,
    reveal: Vec<Range<u32>>,
    switch_off: Vec<Range<u32>>,
}

impl<'c> ScriptedControls<'c> {
    pub fn new(clock: &'c SimClock) -> Self {
        ScriptedControls {
            clock,
            analog: 0,
            advance: Vec::new(),
            reveal: Vec::new(),
            switch_off: Vec::new(),
        }
    }

    pub fn analog(mut self, value: u8) -> Self {
        self.analog = value;
        self
    }

    /// Hold `button` down briefly, starting at wall time `at`.
    pub fn press(mut self, button: Button, at: u32) -> Self {
        let window = at..at + HOLD;
        match button {
            Button::Advance => self.advance.push(window),
            Button::Reveal => self.reveal.push(window),
        }
        self
    }

    /// A press every [`GAP`] ticks from `start`. Each press acts on whichever cell is blinking.
    pub fn actions(mut self, start: u32, buttons: &[Button]) -> Self {
        for (i, button) in buttons.iter().enumerate() {
            self = self.press(*button, start + i as u32 * GAP);
        }
        self
    }

    /// Turn the mode switch off for `from..until`.
    pub fn switch_off(mut self, from: u32, until: u32) -> Self {
        self.switch_off.push(from..until);
        self
    }

    fn level(&self, windows: &[Range<u32>]) -> Level {
        let now = self.clock.wall();
        Level::from(!windows.iter().any(|w| w.contains(&now)))
    }
}

impl InputSampler for ScriptedControls<'_> {
    fn read_analog(&mut self) -> Result<u8> {
        Ok(self.analog)
    }

    fn advance(&mut self) -> Result<Level> {
        Ok(self.level(&self.advance))
    }

    fn reveal(&mut self) -> Result<Level> {
        Ok(self.level(&self.reveal))
    }

    fn mode(&mut self) -> Result<Level> {
        // On (low) except inside an off window
        let now = self.clock.wall();
        Ok(Level::from(self.switch_off.iter().any(|w| w.contains(&now))))
    }
}

/// Indicator array remembering every change, stamped with wall time.
pub struct RecordingDisplay<'c> {
    clock: &'c SimClock,
    cells: [Indicator; CELLS],
    history: Vec<(u32, usize, Indicator)>,
}

impl<'c> RecordingDisplay<'c> {
    pub fn new(clock: &'c SimClock) -> Self {
        RecordingDisplay {
            clock,
            cells: [Indicator::Off; CELLS],
            history: Vec::new(),
        }
    }

    pub fn state(&self, cell: usize) -> Indicator {
        self.cells[cell]
    }

    pub fn history(&self) -> &[(u32, usize, Indicator)] {
        &self.history
    }
}

impl IndicatorArray for RecordingDisplay<'_> {
    fn set(&mut self, cell: usize, state: Indicator) -> Result<()> {
        self.cells[cell] = state;
        self.history.push((self.clock.wall(), cell, state));
        Ok(())
    }
}

pub struct RecordingBuzzer<'c> {
    clock: &'c SimClock,
    on: bool,
    history: Vec<(u32, bool)>,
}

impl<'c> RecordingBuzzer<'c> {
    pub fn new(clock: &'c SimClock) -> Self {
        RecordingBuzzer {
            clock,
            on: false,
            history: Vec::new(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn history(&self) -> &[(u32, bool)] {
        &self.history
    }
}

impl Buzzer for RecordingBuzzer<'_> {
    fn set(&mut self, on: bool) -> Result<()> {
        self.on = on;
        self.history.push((self.clock.wall(), on));
        Ok(())
    }
}

/// Hands out a fixed sequence of bytes, repeating it.
pub struct SeqRng {
    values: Vec<u8>,
    next: usize,
}

impl SeqRng {
    pub fn new(values: &[u8]) -> Self {
        SeqRng {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl MineSource for SeqRng {
    fn next_u8(&mut self) -> u8 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Keeps log messages per test thread, so parallel tests don't see each other's records.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| records.borrow_mut().push(record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Start capturing log messages on this thread, dropping anything captured so far.
pub fn capture_logs() {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Messages logged on this thread since [`capture_logs`].
pub fn captured_logs() -> Vec<String> {
    RECORDS.with(|records| records.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_switch_is_on_outside_off_windows() {
        let clock = SimClock::new();
        let mut controls = ScriptedControls::new(&clock).switch_off(5, 10);
        assert!(controls.mode().unwrap().is_asserted());
        clock.advance(5);
        assert_eq!(controls.mode().unwrap(), Level::High);
        clock.advance(5);
        assert_eq!(controls.mode().unwrap(), Level::Low);
    }

    #[test]
    fn scripted_press_holds_the_button_low() {
        let clock = SimClock::new();
        let mut controls = ScriptedControls::new(&clock).press(Button::Reveal, 3);
        assert_eq!(controls.reveal().unwrap(), Level::High);
        clock.advance(3);
        assert_eq!(controls.reveal().unwrap(), Level::Low);
        assert_eq!(controls.advance().unwrap(), Level::High);
        clock.advance(HOLD);
        assert_eq!(controls.reveal().unwrap(), Level::High);
    }
}
