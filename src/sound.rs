use crate::error::Result;

/// The alarm buzzer.
pub trait Buzzer {
    fn set(&mut self, on: bool) -> Result<()>;
}

impl<T: Buzzer + ?Sized> Buzzer for &mut T {
    fn set(&mut self, on: bool) -> Result<()> {
        (**self).set(on)
    }
}
