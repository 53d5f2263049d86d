pub mod gpio_button;
pub mod gpio_led;
pub mod traits;

#[cfg(test)]
pub(crate) mod fake;

/// Electrical level that means "on" for an LED or "pressed" for a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}
