//! Non-blocking on/off/blink driver for a single LED.

use embassy_time::{Duration, Instant};

use crate::config::OutputConfig;
use crate::hardware::traits::Led;

/// Owns one LED and toggles it on a fixed period while blinking.
///
/// Blink mode only governs whether [`advance`](Self::advance) flips the level;
/// [`turn_on`](Self::turn_on) and [`turn_off`](Self::turn_off) write the pin
/// directly and leave blink mode as it is.
pub struct DigitalOutputController<L> {
    led: L,
    config: OutputConfig,
    is_blinking: bool,
    blink_period: Duration,
    last_toggle_time: Instant,
}

impl<L: Led> DigitalOutputController<L> {
    /// Takes the LED as-is; nothing is written until the first command.
    pub fn new(led: L, config: OutputConfig) -> Self {
        Self {
            led,
            config,
            is_blinking: false,
            blink_period: config.default_blink_period,
            last_toggle_time: Instant::from_ticks(0),
        }
    }

    pub fn turn_on(&mut self) -> Result<(), L::Error> {
        self.led.on()
    }

    pub fn turn_off(&mut self) -> Result<(), L::Error> {
        self.led.off()
    }

    /// Switches blink mode on or off.
    ///
    /// Turning it on restarts the period at `now`. Turning it off stops
    /// toggling and leaves the LED at whatever level it last had.
    pub fn start_blink(&mut self, period: Duration, now: Instant) {
        self.is_blinking = !self.is_blinking;
        if self.is_blinking {
            self.blink_period = period;
            self.last_toggle_time = now;
            #[cfg(feature = "defmt")]
            defmt::debug!("blink on, period {} ms", period.as_millis());
        } else {
            #[cfg(feature = "defmt")]
            defmt::debug!("blink off");
        }
    }

    pub fn start_default_blink(&mut self, now: Instant) {
        self.start_blink(self.config.default_blink_period, now);
    }

    /// Call every loop iteration. Flips the LED once the blink period has
    /// been exceeded; a late call simply toggles late.
    pub fn advance(&mut self, now: Instant) -> Result<(), L::Error> {
        if !self.is_blinking {
            return Ok(());
        }

        if now.saturating_duration_since(self.last_toggle_time) > self.blink_period {
            self.led.toggle()?;
            self.last_toggle_time = now;
            #[cfg(feature = "defmt")]
            defmt::trace!("blink toggle at {} ms", now.as_millis());
        }

        Ok(())
    }

    pub fn is_blinking(&self) -> bool {
        self.is_blinking
    }

    pub fn blink_period(&self) -> Duration {
        self.blink_period
    }

    /// Reference point of the current blink period, `None` while not blinking.
    pub fn last_toggle_time(&self) -> Option<Instant> {
        self.is_blinking.then_some(self.last_toggle_time)
    }

    pub fn led_mut(&mut self) -> &mut L {
        &mut self.led
    }

    pub fn release(self) -> L {
        self.led
    }
}
