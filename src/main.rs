#![no_main]
#![no_std]

mod hw;

use cortex_m_rt::entry;
use log::{debug, warn, LevelFilter};
use microbit::hal::Rng;
use microbit::Board;
use panic_rtt_target as _;

use minebit::{Config, GameEngine};

use crate::hw::control::Controls;
use crate::hw::display::MatrixIndicators;
use crate::hw::sound::PinBuzzer;
use crate::hw::HwRng;

#[entry]
fn main() -> ! {
    hw::logger::init(LevelFilter::Info);
    let board = Board::take().unwrap();

    let ticks = hw::timer::init_ticks(board.TIMER0);
    let display = MatrixIndicators::new(board.TIMER1, board.display_pins);
    let controls = Controls::new(board.buttons, board.edge.e16, board.edge.e02, board.ADC);
    let buzzer = PinBuzzer::new(board.edge.e08);
    let rng = HwRng(Rng::new(board.RNG));

    let mut engine = GameEngine::new(display, controls, buzzer, rng, ticks, Config::default());

    loop {
        match engine.step() {
            Ok(Some(report)) => debug!(
                "Round over: {:?}, mine at {:?}",
                report,
                engine.board().mine()
            ),
            Ok(None) => (),
            Err(e) => warn!("Round aborted: {}", e),
        }
    }
}
