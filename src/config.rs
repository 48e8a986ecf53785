//! Startup configuration
//!
//! Pin numbers, strip lengths and tuning constants are fixed when the show
//! is built and never change afterwards.

use embassy_time::Duration;

use crate::error::ConfigError;
use crate::state::{DEFAULT_BRIGHTNESS, STRIP_COUNT, StripSlot};

/// Main loop period
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(50);

/// Channel cutoff below which the first strip shows black instead of a
/// dim color. That strip cannot display low intensities correctly.
pub const DEFAULT_DARK_CUTOFF: u8 = 85;

/// Configuration of a single LED strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// GPIO the strip data line is attached to
    pub data_pin: u8,
    /// Number of LEDs on the strip
    pub led_count: usize,
    /// Render black for colors with every channel below this value
    pub dark_cutoff: Option<u8>,
}

impl StripConfig {
    /// Check the strip fits a frame buffer of `MAX_LEDS` pixels
    pub const fn check<const MAX_LEDS: usize>(&self, slot: StripSlot) -> Result<(), ConfigError> {
        if self.led_count == 0 {
            return Err(ConfigError::EmptyStrip { slot });
        }
        if self.led_count > MAX_LEDS {
            return Err(ConfigError::StripTooLong {
                slot,
                led_count: self.led_count,
                capacity: MAX_LEDS,
            });
        }
        Ok(())
    }
}

/// Dial (potentiometer) calibration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialConfig {
    /// ADC pin of the potentiometer wiper
    pub adc_pin: u8,
    /// Reading that corresponds to full brightness
    pub full_scale_microvolts: u32,
    /// Readings below this brightness count as zero
    pub dead_zone: f32,
    /// Differences up to this size are treated as jitter
    pub hysteresis: f32,
    /// Brightness change applied per sample when the dial moves
    pub step: f32,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            adc_pin: 2,
            full_scale_microvolts: 2_875_000,
            dead_zone: 0.06,
            hysteresis: 0.15,
            step: 0.1,
        }
    }
}

/// Momentary push button configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    pub pin: u8,
    /// Pressed reads as low (pull-up wiring)
    pub active_low: bool,
    /// Report a short press on release instead of on press
    pub short_press_waits_release: bool,
    /// Time a level has to be stable before it counts
    pub debounce: Duration,
    /// Hold time that turns a press into a long press
    pub long_press: Duration,
}

impl ButtonConfig {
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            active_low: true,
            short_press_waits_release: true,
            debounce: Duration::from_millis(20),
            long_press: Duration::from_millis(1000),
        }
    }
}

/// Full configuration of the light show
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowConfig {
    pub strips: [StripConfig; STRIP_COUNT],
    pub dial: DialConfig,
    /// Short: toggle animation, long: reverse direction
    pub animate_button: ButtonConfig,
    /// Short: next palette, long: power on/off
    pub color_button: ButtonConfig,
    pub tick_period: Duration,
    pub initial_brightness: f32,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            strips: [
                StripConfig {
                    data_pin: 13,
                    led_count: 32,
                    dark_cutoff: Some(DEFAULT_DARK_CUTOFF),
                },
                StripConfig {
                    data_pin: 8,
                    led_count: 30,
                    dark_cutoff: None,
                },
            ],
            dial: DialConfig::default(),
            animate_button: ButtonConfig::new(6),
            color_button: ButtonConfig::new(5),
            tick_period: DEFAULT_TICK_PERIOD,
            initial_brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl ShowConfig {
    /// Check the configuration against a frame buffer of `MAX_LEDS` pixels
    pub fn validate<const MAX_LEDS: usize>(&self) -> Result<(), ConfigError> {
        for slot in StripSlot::ALL {
            self.strips[slot.index()].check::<MAX_LEDS>(slot)?;
        }
        if self.tick_period.as_ticks() == 0 {
            return Err(ConfigError::InvalidTickPeriod);
        }
        if self.dial.full_scale_microvolts == 0 {
            return Err(ConfigError::InvalidDialCalibration);
        }
        Ok(())
    }
}
