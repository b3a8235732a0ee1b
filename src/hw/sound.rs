use embedded_hal::digital::OutputPin;
use microbit::hal::gpio::p0::P0_10;
use microbit::hal::gpio::{self, Disconnected, Output, Pin, PushPull};
use minebit::{Buzzer, Error, Result};

/// An active buzzer on edge pin 8, sounding while the pin is high.
pub(crate) struct PinBuzzer {
    pin: Pin<Output<PushPull>>,
}

impl PinBuzzer {
    pub(crate) fn new(buzzer_pin: P0_10<Disconnected>) -> Self {
        PinBuzzer {
            pin: buzzer_pin.into_push_pull_output(gpio::Level::Low).degrade(),
        }
    }
}

impl Buzzer for PinBuzzer {
    fn set(&mut self, on: bool) -> Result<()> {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| Error::Buzzer)
    }
}
