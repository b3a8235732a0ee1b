//! Tick counters shared between the timer interrupt and the game loop.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// The three independent counters driven by the tick source.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Counter {
    /// Elapsed time of the current round.
    Round,
    /// Settle delay after a button press.
    Debounce,
    /// Length of the current blink phase.
    Blink,
}

impl Counter {
    fn slot(self) -> usize {
        match self {
            Counter::Round => 0,
            Counter::Debounce => 1,
            Counter::Blink => 2,
        }
    }
}

/// A source of hardware ticks.
///
/// `idle` is the point where the game loop yields while it waits for the counters to move. On the
/// board it just spins, the interrupt does the counting.
pub trait TickSource {
    fn read(&self, counter: Counter) -> u32;
    fn reset(&self, counter: Counter);
    fn enable(&self);
    fn disable(&self);
    fn idle(&self);
}

/// Block until `counter` has reached `target`.
pub fn wait_until<T: TickSource + ?Sized>(ticks: &T, counter: Counter, target: u32) {
    while ticks.read(counter) < target {
        ticks.idle();
    }
}

/// Interrupt-safe counters. Lives in a `static` on the board; the timer interrupt calls
/// [`Ticks::on_interrupt`] once per tick.
pub struct Ticks {
    counters: [AtomicU32; 3],
    enabled: AtomicBool,
}

impl Ticks {
    pub const fn new() -> Self {
        Ticks {
            counters: [AtomicU32::new(0), AtomicU32::new(0), AtomicU32::new(0)],
            enabled: AtomicBool::new(false),
        }
    }

    /// Advance every counter by one tick, unless the source is disabled.
    pub fn on_interrupt(&self) {
        if !self.enabled.load(Ordering::Acquire) {
            return;
        }
        for counter in &self.counters {
            counter.fetch_add(1, Ordering::AcqRel);
        }
    }
}

impl Default for Ticks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for Ticks {
    fn read(&self, counter: Counter) -> u32 {
        self.counters[counter.slot()].load(Ordering::Acquire)
    }

    fn reset(&self, counter: Counter) {
        self.counters[counter.slot()].store(0, Ordering::Release);
    }

    fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    fn idle(&self) {
        core::hint::spin_loop();
    }
}
