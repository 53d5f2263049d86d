//! Buttons and one shared LED, serviced from a single polling loop.

use embassy_time::Instant;

use crate::button::{ButtonEvent, DebouncedButton};
use crate::config::PanelConfig;
use crate::hardware::traits::{Button, Led};
use crate::output::DigitalOutputController;

/// Monotonic time source for [`Panel::run`].
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The `embassy-time` driver clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<BE, LE> {
    Button(BE),
    Output(LE),
}

/// Applies one button event to the output.
///
/// Click turns the LED on, release turns it off and hold switches blink mode.
pub fn dispatch<L: Led>(
    event: ButtonEvent,
    output: &mut DigitalOutputController<L>,
    now: Instant,
    config: &PanelConfig,
) -> Result<(), L::Error> {
    match event {
        ButtonEvent::Clicked => output.turn_on(),
        ButtonEvent::Released => output.turn_off(),
        ButtonEvent::Held => {
            output.start_blink(config.hold_blink_period, now);
            Ok(())
        }
    }
}

pub struct Panel<B, L, const N: usize> {
    buttons: [DebouncedButton<B>; N],
    output: DigitalOutputController<L>,
    config: PanelConfig,
}

impl<B: Button, L: Led, const N: usize> Panel<B, L, N> {
    pub fn new(
        buttons: [DebouncedButton<B>; N],
        output: DigitalOutputController<L>,
        config: PanelConfig,
    ) -> Self {
        Self {
            buttons,
            output,
            config,
        }
    }

    /// Polls every button in order, handling each event before the next
    /// button is polled, then advances the blink timer once.
    ///
    /// Returns the events seen this tick, indexed like the buttons.
    pub fn tick(
        &mut self,
        now: Instant,
    ) -> Result<[Option<ButtonEvent>; N], PanelError<B::Error, L::Error>> {
        let mut events = [None; N];

        for (button, slot) in self.buttons.iter_mut().zip(events.iter_mut()) {
            let event = button.poll(now).map_err(PanelError::Button)?;
            if let Some(event) = event {
                #[cfg(feature = "defmt")]
                defmt::debug!("{} at {} ms", event, now.as_millis());
                dispatch(event, &mut self.output, now, &self.config).map_err(PanelError::Output)?;
            }
            *slot = event;
        }

        self.output.advance(now).map_err(PanelError::Output)?;
        Ok(events)
    }

    /// Ticks forever. Only a pin failure ends the loop.
    pub fn run<C: Clock>(&mut self, clock: &C) -> PanelError<B::Error, L::Error> {
        loop {
            if let Err(error) = self.tick(clock.now()) {
                return error;
            }
        }
    }

    pub fn buttons(&self) -> &[DebouncedButton<B>; N] {
        &self.buttons
    }

    pub fn output(&self) -> &DigitalOutputController<L> {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut DigitalOutputController<L> {
        &mut self.output
    }
}
