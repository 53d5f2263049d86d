use super::ActiveLevel;
use super::traits::Led;
use embedded_hal::digital::StatefulOutputPin;

/// LED on a push-pull output pin.
///
/// The Blue Pill's on-board LED on PC13 sinks current, so it is wired
/// [`ActiveLevel::Low`].
pub struct GpioLed<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: StatefulOutputPin> GpioLed<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// Whether the pin is currently driven to the "on" level.
    pub fn is_on(&mut self) -> Result<bool, P::Error> {
        match self.active {
            ActiveLevel::High => self.pin.is_set_high(),
            ActiveLevel::Low => self.pin.is_set_low(),
        }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> Led for GpioLed<P> {
    type Error = P::Error;

    fn on(&mut self) -> Result<(), Self::Error> {
        match self.active {
            ActiveLevel::High => self.pin.set_high(),
            ActiveLevel::Low => self.pin.set_low(),
        }
    }

    fn off(&mut self) -> Result<(), Self::Error> {
        match self.active {
            ActiveLevel::High => self.pin.set_low(),
            ActiveLevel::Low => self.pin.set_high(),
        }
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.pin.toggle()
    }
}
