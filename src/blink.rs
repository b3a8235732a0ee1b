//! Blinking a single cell until the player acts on it.

use log::{debug, info};

use crate::config::Config;
use crate::control::{Debouncer, InputSampler};
use crate::display::{Indicator, IndicatorArray};
use crate::error::Result;
use crate::game::{Board, Coords, Outcome, Reveal, RoundState};
use crate::sound::Buzzer;
use crate::ticks::{wait_until, Counter, TickSource};

/// How the player left a blinking cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellAction {
    /// "Advance": the cell stays unrevealed and dark.
    Skipped,
    /// "Reveal": the cell was classified. Revealing the mine ends the round.
    Revealed(Reveal),
}

/// Drives one cell's indicator and watches the controls while it blinks.
pub struct BlinkController<'a, D, C, B, T: ?Sized> {
    display: &'a mut D,
    controls: &'a mut C,
    buzzer: &'a mut B,
    ticks: &'a T,
    debouncer: Debouncer<'a, T>,
    config: &'a Config,
}

impl<'a, D, C, B, T> BlinkController<'a, D, C, B, T>
where
    D: IndicatorArray,
    C: InputSampler,
    B: Buzzer,
    T: TickSource + ?Sized,
{
    pub fn new(
        display: &'a mut D,
        controls: &'a mut C,
        buzzer: &'a mut B,
        ticks: &'a T,
        config: &'a Config,
    ) -> Self {
        BlinkController {
            display,
            controls,
            buzzer,
            ticks,
            debouncer: Debouncer::new(ticks, config.debounce_ticks),
            config,
        }
    }

    /// Blink `cell` until either button is pressed, then act on it.
    ///
    /// Each pass shows [`Indicator::ColorA`] then [`Indicator::ColorB`] for half the blink period
    /// each, cutting a phase short as soon as a button goes down. The buttons are then checked,
    /// advance first. With neither pressed the mode switch is checked and play pauses while it
    /// is off.
    pub fn run(
        &mut self,
        board: &mut Board,
        round: &mut RoundState,
        cell: usize,
    ) -> Result<CellAction> {
        let half = round.half_period();
        loop {
            self.phase(cell, Indicator::ColorA, half)?;
            self.phase(cell, Indicator::ColorB, half)?;

            if self.controls.advance()?.is_asserted() {
                self.debouncer.wait_stable();
                self.display.set(cell, Indicator::Off)?;
                debug!("Skipped cell {}", cell);
                return Ok(CellAction::Skipped);
            }

            if self.controls.reveal()?.is_asserted() {
                self.debouncer.wait_stable();
                self.display.set(cell, Indicator::Off)?;
                let reveal = board.reveal(Coords::from_index(cell));
                debug!("Revealed cell {}: {:?}", cell, reveal);
                match reveal {
                    Reveal::Mine => self.lose(round, cell)?,
                    Reveal::Adjacent => self.display.set(cell, Indicator::ColorA)?,
                    Reveal::Clear => self.display.set(cell, Indicator::ColorB)?,
                }
                return Ok(CellAction::Revealed(reveal));
            }

            self.pause_while_off()?;
        }
    }

    /// Show one colour until the phase runs out or a button is pressed.
    fn phase(&mut self, cell: usize, colour: Indicator, ticks: u32) -> Result<()> {
        self.display.set(cell, colour)?;
        while self.ticks.read(Counter::Blink) < ticks && !self.button_down()? {
            self.ticks.idle();
        }
        self.ticks.reset(Counter::Blink);
        Ok(())
    }

    fn button_down(&mut self) -> Result<bool> {
        Ok(self.controls.advance()?.is_asserted() || self.controls.reveal()?.is_asserted())
    }

    /// Hold the game, with the tick source stopped, for as long as the mode switch is off.
    pub(crate) fn pause_while_off(&mut self) -> Result<()> {
        if self.controls.mode()?.is_asserted() {
            return Ok(());
        }
        self.ticks.disable();
        info!("Mode switch is off, game paused");
        while !self.controls.mode()?.is_asserted() {
            self.ticks.idle();
        }
        self.ticks.enable();
        info!("Game resumed");
        Ok(())
    }

    /// The mine was revealed: report, then sound the alarm. The alarm can't be interrupted.
    fn lose(&mut self, round: &mut RoundState, cell: usize) -> Result<()> {
        round.elapsed_ticks = self.ticks.read(Counter::Round);
        round.outcome = Outcome::Lost;
        info!("You lose!");
        info!(
            "Total game time: {} seconds",
            self.config.seconds(round.elapsed_ticks)
        );

        self.ticks.reset(Counter::Round);
        self.ticks.reset(Counter::Blink);
        while self.ticks.read(Counter::Round) < self.config.alarm_ticks {
            self.buzzer.set(true)?;
            self.display.set(cell, Indicator::ColorA)?;
            wait_until(self.ticks, Counter::Blink, round.half_period());
            self.display.set(cell, Indicator::Off)?;
            wait_until(self.ticks, Counter::Blink, round.blink_period);
            self.ticks.reset(Counter::Blink);
        }
        self.buzzer.set(false)
    }
}
