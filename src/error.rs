//! Error types
//!
//! Hardware failures at runtime are never fatal: the show logs them and
//! carries on with the next tick. Only configuration errors stop startup.

use core::fmt;

use crate::input::InputEvent;
use crate::state::StripSlot;

/// Invalid startup configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The palette collection has no palettes
    NoPalettes,
    /// A palette has no colors
    EmptyPalette { index: usize },
    /// A strip is configured with zero LEDs
    EmptyStrip { slot: StripSlot },
    /// A strip has more LEDs than the frame buffer can hold
    StripTooLong {
        slot: StripSlot,
        led_count: usize,
        capacity: usize,
    },
    /// The main loop period is zero
    InvalidTickPeriod,
    /// The dial full-scale reading is zero
    InvalidDialCalibration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPalettes => write!(f, "palette collection is empty"),
            Self::EmptyPalette { index } => write!(f, "palette {} has no colors", index),
            Self::EmptyStrip { slot } => write!(f, "strip {} has no LEDs", slot.index()),
            Self::StripTooLong {
                slot,
                led_count,
                capacity,
            } => write!(
                f,
                "strip {} has {} LEDs, frame buffer holds {}",
                slot.index(),
                led_count,
                capacity
            ),
            Self::InvalidTickPeriod => write!(f, "tick period must be non-zero"),
            Self::InvalidDialCalibration => write!(f, "dial full-scale reading must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// The strip driver failed to push a frame to the LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmitError;

impl fmt::Display for TransmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LED strip transmission failed")
    }
}

impl core::error::Error for TransmitError {}

/// The dial ADC could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialReadError;

impl fmt::Display for DialReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dial ADC read failed")
    }
}

impl core::error::Error for DialReadError {}

/// The input queue was full; the rejected event is handed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub InputEvent);

impl fmt::Display for QueueFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input queue full, dropped {:?}", self.0)
    }
}

impl core::error::Error for QueueFull {}
