/// A single on/off indicator.
///
/// `on` and `off` must be idempotent and take effect immediately.
pub trait Led {
    type Error;

    fn on(&mut self) -> Result<(), Self::Error>;
    fn off(&mut self) -> Result<(), Self::Error>;
    fn toggle(&mut self) -> Result<(), Self::Error>;
}

/// A momentary switch, sampled as its raw logical level.
pub trait Button {
    type Error;

    fn is_pressed(&mut self) -> Result<bool, Self::Error>;
}
