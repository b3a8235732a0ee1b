use thiserror::Error;

/// Failures reported by the hardware adapters. Winning or losing a round is never an error.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Failed to drive an indicator cell")]
    Indicator,
    #[error("Failed to read a button or switch level")]
    Input,
    #[error("Failed to sample the analog input")]
    Analog,
    #[error("Failed to drive the buzzer")]
    Buzzer,
}

pub type Result<T> = core::result::Result<T, Error>;
