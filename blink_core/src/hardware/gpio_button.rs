use super::ActiveLevel;
use super::traits::Button;
use embedded_hal::digital::InputPin;

/// Push-button on a digital input.
///
/// The pull resistor is configured by whoever builds the pin; with a
/// pull-down the idle level is low and the button is [`ActiveLevel::High`].
pub struct GpioButton<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: InputPin> GpioButton<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> Button for GpioButton<P> {
    type Error = P::Error;

    fn is_pressed(&mut self) -> Result<bool, Self::Error> {
        match self.active {
            ActiveLevel::High => self.pin.is_high(),
            ActiveLevel::Low => self.pin.is_low(),
        }
    }
}
