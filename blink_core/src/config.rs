//! Construction-time settings.

use embassy_time::Duration;

/// Contact bounce on tactile switches settles well inside this window.
pub const DEFAULT_BOUNCE_WINDOW: Duration = Duration::from_millis(10);
pub const DEFAULT_HOLD_THRESHOLD: Duration = Duration::from_millis(400);
pub const DEFAULT_BLINK_PERIOD: Duration = Duration::from_millis(400);
pub const DEFAULT_HOLD_BLINK_PERIOD: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Dead time after an accepted transition during which the pin is not read.
    pub bounce_window: Duration,
    /// How long a press must stay settled before it counts as held.
    pub hold_threshold: Duration,
}

impl ButtonConfig {
    pub const fn with_bounce_window(mut self, bounce_window: Duration) -> Self {
        self.bounce_window = bounce_window;
        self
    }

    pub const fn with_hold_threshold(mut self, hold_threshold: Duration) -> Self {
        self.hold_threshold = hold_threshold;
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            bounce_window: DEFAULT_BOUNCE_WINDOW,
            hold_threshold: DEFAULT_HOLD_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputConfig {
    /// Period used by [`start_default_blink`](crate::DigitalOutputController::start_default_blink).
    pub default_blink_period: Duration,
}

impl OutputConfig {
    pub const fn with_default_blink_period(mut self, period: Duration) -> Self {
        self.default_blink_period = period;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_blink_period: DEFAULT_BLINK_PERIOD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Blink period requested when a button is held.
    pub hold_blink_period: Duration,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            hold_blink_period: DEFAULT_HOLD_BLINK_PERIOD,
        }
    }
}
