use core::cell::RefCell;
use cortex_m::interrupt::{free, Mutex};
use microbit::display::nonblocking::{Display, GreyscaleImage};
use microbit::gpio::DisplayPins;
use microbit::pac::{self, interrupt, TIMER1};
use minebit::game::{Coords, CELLS};
use minebit::{Error, Indicator, IndicatorArray, Result};

/// Matrix brightness standing in for the first indicator colour.
const COLOR_A_BRIGHTNESS: u8 = 9;
/// Matrix brightness standing in for the second indicator colour.
const COLOR_B_BRIGHTNESS: u8 = 2;

static DISPLAY: Mutex<RefCell<Option<Display<TIMER1>>>> = Mutex::new(RefCell::new(None));

/// The nine cells drawn on the 5x5 LED matrix, one LED per cell with a dark LED between cells.
pub(crate) struct MatrixIndicators {
    frame: [[u8; 5]; 5],
}

impl MatrixIndicators {
    pub(crate) fn new(board_timer: TIMER1, display_pins: DisplayPins) -> Self {
        let display = Display::new(board_timer, display_pins);
        free(move |cs| {
            *DISPLAY.borrow(cs).borrow_mut() = Some(display);
            unsafe {
                pac::NVIC::unmask(pac::Interrupt::TIMER1);
            }
            pac::NVIC::unpend(pac::Interrupt::TIMER1);
        });
        MatrixIndicators {
            frame: [[0; 5]; 5],
        }
    }
}

impl IndicatorArray for MatrixIndicators {
    fn set(&mut self, cell: usize, state: Indicator) -> Result<()> {
        if cell >= CELLS {
            return Err(Error::Indicator);
        }
        let coords = Coords::from_index(cell);
        self.frame[coords.row as usize * 2][coords.col as usize * 2] = match state {
            Indicator::Off => 0,
            Indicator::ColorA => COLOR_A_BRIGHTNESS,
            Indicator::ColorB => COLOR_B_BRIGHTNESS,
        };

        let image = GreyscaleImage::new(&self.frame);
        free(|cs| {
            if let Some(display) = DISPLAY.borrow(cs).borrow_mut().as_mut() {
                display.show(&image);
            }
        });
        Ok(())
    }
}

#[interrupt]
fn TIMER1() {
    free(|cs| {
        if let Some(display) = DISPLAY.borrow(cs).borrow_mut().as_mut() {
            display.handle_display_event();
        }
    });
}
