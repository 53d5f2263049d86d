//! Dead-time debouncing with hold detection.

use embassy_time::{Duration, Instant};

use crate::config::ButtonConfig;
use crate::hardware::traits::Button;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Settled transition to pressed.
    Clicked,
    /// Settled transition to released.
    Released,
    /// Pressed for longer than the hold threshold. Fires once per press.
    Held,
}

/// Turns a raw, bouncy input into click / release / hold events.
///
/// Every accepted transition opens a fixed bounce window during which the
/// pin is not sampled at all. Hold time is measured from that transition,
/// i.e. from when the press was first accepted.
pub struct DebouncedButton<B> {
    button: B,
    bounce_window: Duration,
    hold_threshold: Duration,
    settled_state: bool,
    in_bounce_window: bool,
    change_timestamp: Instant,
    is_held: bool,
}

impl<B: Button> DebouncedButton<B> {
    /// Samples the pin once to pick up its resting state.
    pub fn new(mut button: B, config: ButtonConfig, now: Instant) -> Result<Self, B::Error> {
        let settled_state = button.is_pressed()?;
        Ok(Self {
            button,
            bounce_window: config.bounce_window,
            hold_threshold: config.hold_threshold,
            settled_state,
            in_bounce_window: false,
            change_timestamp: now,
            is_held: false,
        })
    }

    /// Call every loop iteration. Reads the pin at most once.
    pub fn poll(&mut self, now: Instant) -> Result<Option<ButtonEvent>, B::Error> {
        let elapsed = now.saturating_duration_since(self.change_timestamp);

        if self.in_bounce_window {
            if elapsed > self.bounce_window {
                self.in_bounce_window = false;
            }
            return Ok(None);
        }

        let current = self.button.is_pressed()?;

        if current == self.settled_state {
            if current && elapsed > self.hold_threshold && !self.is_held {
                self.is_held = true;
                return Ok(Some(ButtonEvent::Held));
            }
            return Ok(None);
        }

        self.change_timestamp = now;
        self.in_bounce_window = true;
        self.is_held = false;
        self.settled_state = current;

        #[cfg(feature = "defmt")]
        defmt::trace!("button settled {} at {} ms", current, now.as_millis());

        Ok(Some(if current {
            ButtonEvent::Clicked
        } else {
            ButtonEvent::Released
        }))
    }

    /// Last accepted logical state.
    pub fn is_pressed(&self) -> bool {
        self.settled_state
    }

    pub fn is_held(&self) -> bool {
        self.is_held
    }

    pub fn in_bounce_window(&self) -> bool {
        self.in_bounce_window
    }

    pub fn last_change(&self) -> Instant {
        self.change_timestamp
    }

    pub fn config(&self) -> ButtonConfig {
        ButtonConfig {
            bounce_window: self.bounce_window,
            hold_threshold: self.hold_threshold,
        }
    }

    pub fn release(self) -> B {
        self.button
    }
}
