//! STM32F103 Blue Pill: two debounced buttons driving the onboard LED
//! =============================================================================================
//!
//! Date			Author          Notes
//! 14/10/2026	    BB              Initial release
//!
//!==============================================================================================
//!
//! Hardware Connections:
//!   Button A -> PA0 (internal pull-down, other leg to 3.3V)
//!   Button B -> PA1 (internal pull-down, other leg to 3.3V)
//!   LED      -> PC13 (onboard, active low)
//!
//! Behaviour (either button):
//! 1. Press        -> LED on
//! 2. Release      -> LED off
//! 3. Hold > 400ms -> toggle 100ms blinking
//!
//! The loop never sleeps or awaits: every pass polls both buttons and then
//! advances the blink timer against `embassy_time::Instant::now()`.

#![no_std]
#![no_main]

use blink_core::hardware::{ActiveLevel, gpio_button::GpioButton, gpio_led::GpioLed};
use blink_core::{
    ButtonConfig, DebouncedButton, DigitalOutputController, OutputConfig, Panel, PanelConfig,
    PanelError, SystemClock,
};
use cortex_m_rt::entry;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::Instant;
use {defmt_rtt as _, panic_probe as _}; // Logging and panic handlers

#[entry]
fn main() -> ! {
    // Initialize peripherals with default configuration (also starts the time driver)
    let p = embassy_stm32::init(Default::default());
    defmt::info!("button_blink starting");

    // Onboard LED starts off (PC13 is active low)
    let led = Output::new(p.PC13, Level::High, Speed::Low);
    let output = DigitalOutputController::new(
        GpioLed::new(led, ActiveLevel::Low),
        OutputConfig::default(),
    );

    // Buttons idle low through the internal pull-down
    let button_config = ButtonConfig::default();
    let now = Instant::now();
    let button_a = DebouncedButton::new(
        GpioButton::new(Input::new(p.PA0, Pull::Down), ActiveLevel::High),
        button_config,
        now,
    )
    .unwrap();
    let button_b = DebouncedButton::new(
        GpioButton::new(Input::new(p.PA1, Pull::Down), ActiveLevel::High),
        button_config,
        now,
    )
    .unwrap();

    defmt::info!("buttons on PA0/PA1, LED on PC13, {}", button_config);

    let mut panel = Panel::new([button_a, button_b], output, PanelConfig::default());

    // Only returns on a pin failure, which embassy-stm32 GPIO cannot produce
    match panel.run(&SystemClock) {
        PanelError::Button(never) | PanelError::Output(never) => match never {},
    }
}
