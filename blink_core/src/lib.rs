//! Debounced push-buttons driving a single blinking LED.
//!
//! Everything here is polled: [`button::DebouncedButton::poll`] and
//! [`output::DigitalOutputController::advance`] take the current
//! [`embassy_time::Instant`] and never block, so one loop can service every
//! component without an executor.

#![no_std]

pub mod button;
pub mod config;
pub mod hardware;
pub mod output;
pub mod panel;

pub use button::{ButtonEvent, DebouncedButton};
pub use config::{ButtonConfig, OutputConfig, PanelConfig};
pub use output::DigitalOutputController;
pub use panel::{Clock, Panel, PanelError, SystemClock};
