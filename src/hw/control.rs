use embedded_hal::digital::InputPin;
use microbit::board::Buttons;
use microbit::hal::gpio::p0::P0_04;
use microbit::hal::gpio::p1::P1_02;
use microbit::hal::gpio::{Disconnected, Floating, Input, Pin, PullUp};
use microbit::hal::saadc::{Resolution, Saadc, SaadcConfig};
use microbit::pac::SAADC;
use minebit::{Error, InputSampler, Level, Result};

/// Buttons A and B, a slide switch on edge pin 16 and a potentiometer on edge pin 2.
pub(crate) struct Controls {
    advance: Pin<Input<Floating>>,
    reveal: Pin<Input<Floating>>,
    mode: Pin<Input<PullUp>>,
    adc: Saadc,
    pot: P0_04<Input<Floating>>,
}

impl Controls {
    pub(crate) fn new(
        board_buttons: Buttons,
        switch_pin: P1_02<Disconnected>,
        pot_pin: P0_04<Disconnected>,
        board_adc: SAADC,
    ) -> Self {
        let adc_config = SaadcConfig {
            resolution: Resolution::_8BIT,
            ..Default::default()
        };
        Controls {
            advance: board_buttons.button_a.degrade(),
            reveal: board_buttons.button_b.degrade(),
            mode: switch_pin.into_pullup_input().degrade(),
            adc: Saadc::new(board_adc, adc_config),
            pot: pot_pin.into_floating_input(),
        }
    }
}

fn level<P: InputPin>(pin: &mut P) -> Result<Level> {
    pin.is_high().map(Level::from).map_err(|_| Error::Input)
}

impl InputSampler for Controls {
    fn read_analog(&mut self) -> Result<u8> {
        let raw = self
            .adc
            .read_channel(&mut self.pot)
            .map_err(|_| Error::Analog)?;
        // Single-ended readings can dip slightly below zero
        Ok(raw.clamp(0, u8::MAX as i16) as u8)
    }

    fn advance(&mut self) -> Result<Level> {
        level(&mut self.advance)
    }

    fn reveal(&mut self) -> Result<Level> {
        level(&mut self.reveal)
    }

    fn mode(&mut self) -> Result<Level> {
        level(&mut self.mode)
    }
}
