use log::{debug, info};

use crate::blink::BlinkController;
use crate::config::Config;
use crate::control::InputSampler;
use crate::display::IndicatorArray;
use crate::error::Result;
use crate::game::{Board, Coords, MineSource, Outcome, RoundState, CELLS};
use crate::sound::Buzzer;
use crate::ticks::{Counter, TickSource};

/// Summary of a finished round.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RoundReport {
    pub outcome: Outcome,
    /// Round time in ticks, excluding pauses. For a lost round this is the time before the alarm.
    pub elapsed_ticks: u32,
    /// `elapsed_ticks` in whole seconds.
    pub seconds: u32,
    /// Cells revealed, including the mine if it was hit.
    pub revealed: u8,
}

/// Runs rounds of the game: sets up the board, walks the unrevealed cells and decides the
/// outcome.
pub struct GameEngine<'t, D, C, B, R, T: ?Sized> {
    display: D,
    controls: C,
    buzzer: B,
    rng: R,
    ticks: &'t T,
    config: Config,
    board: Board,
    idle_reported: bool,
}

impl<'t, D, C, B, R, T> GameEngine<'t, D, C, B, R, T>
where
    D: IndicatorArray,
    C: InputSampler,
    B: Buzzer,
    R: MineSource,
    T: TickSource + ?Sized,
{
    pub fn new(display: D, controls: C, buzzer: B, rng: R, ticks: &'t T, config: Config) -> Self {
        GameEngine {
            display,
            controls,
            buzzer,
            rng,
            ticks,
            config,
            board: Board::new(Coords { row: 0, col: 0 }),
            idle_reported: false,
        }
    }

    /// The board of the current, or most recent, round.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// One pass of the outer loop. Plays a full round if the mode switch is on, otherwise returns
    /// `None` straight away.
    pub fn step(&mut self) -> Result<Option<RoundReport>> {
        if !self.controls.mode()?.is_asserted() {
            if !self.idle_reported {
                info!("Mode switch is off");
                self.idle_reported = true;
            }
            return Ok(None);
        }
        self.idle_reported = false;
        info!("Mode switch is on");
        self.play_round().map(Some)
    }

    /// Play one round to the end. A round only ends by clearing the board or hitting the mine;
    /// turning the mode switch off just pauses it.
    pub fn play_round(&mut self) -> Result<RoundReport> {
        self.board = Board::new(Coords::random(&mut self.rng));
        self.display.clear()?;
        self.buzzer.set(false)?;

        let sample = self.controls.read_analog()?;
        let mut round = RoundState::new(self.config.blink_period(sample));
        debug!(
            "Mine at {:?}, blink period {} ticks",
            self.board.mine(),
            round.blink_period
        );

        self.ticks.reset(Counter::Blink);
        self.ticks.reset(Counter::Round);
        self.ticks.enable();
        info!("Game play is starting");

        while round.outcome == Outcome::InProgress {
            for cell in 0..CELLS {
                if self.board.cell(cell).is_revealed() {
                    continue;
                }
                BlinkController::new(
                    &mut self.display,
                    &mut self.controls,
                    &mut self.buzzer,
                    self.ticks,
                    &self.config,
                )
                .run(&mut self.board, &mut round, cell)?;
                if round.outcome != Outcome::InProgress || self.board.is_cleared() {
                    break;
                }
            }

            if round.outcome == Outcome::InProgress && self.board.is_cleared() {
                round.elapsed_ticks = self.ticks.read(Counter::Round);
                round.outcome = Outcome::Won;
                info!("You win!");
                info!(
                    "Total game time: {} seconds",
                    self.config.seconds(round.elapsed_ticks)
                );
            }
        }

        Ok(RoundReport {
            outcome: round.outcome,
            elapsed_ticks: round.elapsed_ticks,
            seconds: self.config.seconds(round.elapsed_ticks),
            revealed: self.board.revealed(),
        })
    }
}
