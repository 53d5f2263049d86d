//! Pins backed by shared cells, so a test can keep driving or observing a
//! level after handing the pin to a component.

use core::cell::Cell;
use core::convert::Infallible;
use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin, OutputPin, StatefulOutputPin};

use super::traits::{Button, Led};

pub struct FakeOutput<'a> {
    level: &'a Cell<bool>,
    writes: Option<&'a Cell<u32>>,
}

impl<'a> FakeOutput<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level, writes: None }
    }

    pub fn counted(level: &'a Cell<bool>, writes: &'a Cell<u32>) -> Self {
        Self { level, writes: Some(writes) }
    }

    fn write(&mut self, high: bool) {
        if let Some(writes) = self.writes {
            writes.set(writes.get() + 1);
        }
        self.level.set(high);
    }
}

impl ErrorType for FakeOutput<'_> {
    type Error = Infallible;
}

impl OutputPin for FakeOutput<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

impl StatefulOutputPin for FakeOutput<'_> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

pub struct FakeInput<'a> {
    level: &'a Cell<bool>,
    reads: Option<&'a Cell<u32>>,
}

impl<'a> FakeInput<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level, reads: None }
    }

    pub fn counted(level: &'a Cell<bool>, reads: &'a Cell<u32>) -> Self {
        Self { level, reads: Some(reads) }
    }
}

impl ErrorType for FakeInput<'_> {
    type Error = Infallible;
}

impl InputPin for FakeInput<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if let Some(reads) = self.reads {
            reads.set(reads.get() + 1);
        }
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Button and LED whose every access fails.
pub struct DeadPin;

impl Button for DeadPin {
    type Error = PinFault;

    fn is_pressed(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

impl Led for DeadPin {
    type Error = PinFault;

    fn on(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }

    fn off(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }
}

/// Input that fails once its read budget is used up.
pub struct FlakyInput<'a> {
    level: &'a Cell<bool>,
    reads_left: &'a Cell<u32>,
}

impl<'a> FlakyInput<'a> {
    pub fn new(level: &'a Cell<bool>, reads_left: &'a Cell<u32>) -> Self {
        Self { level, reads_left }
    }
}

impl ErrorType for FlakyInput<'_> {
    type Error = PinFault;
}

impl InputPin for FlakyInput<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        match self.reads_left.get() {
            0 => Err(PinFault),
            left => {
                self.reads_left.set(left - 1);
                Ok(self.level.get())
            }
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
