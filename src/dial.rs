//! Brightness dial
//!
//! The potentiometer is sampled once per tick. Brightness follows the dial
//! in fixed steps so fast turns fade instead of jumping, and small jitter
//! inside the hysteresis band is ignored.

use crate::config::DialConfig;
use crate::error::DialReadError;
use crate::log::trace;
use crate::state::AnimationState;

/// Analog input the dial is wired to
pub trait DialInput {
    /// Read the wiper voltage in microvolts
    fn read_microvolts(&mut self) -> Result<u32, DialReadError>;
}

impl DialConfig {
    /// Convert a reading into a brightness, applying the low-end dead zone
    #[allow(clippy::cast_precision_loss)]
    pub fn raw_brightness(&self, microvolts: u32) -> f32 {
        let raw = microvolts as f32 / self.full_scale_microvolts as f32;
        if raw < self.dead_zone { 0.0 } else { raw }
    }

    /// Brightness after one sample, or `None` if it stays unchanged
    #[allow(clippy::float_cmp)]
    pub fn next_brightness(&self, current: f32, raw: f32) -> Option<f32> {
        let diff = raw - current;
        if libm::fabsf(diff) > self.hysteresis {
            if diff > 0.0 {
                trace!("[Dial] up");
                Some(current + self.step)
            } else {
                trace!("[Dial] down");
                Some(current - self.step)
            }
        } else if raw == 0.0 {
            trace!("[Dial] snap to zero");
            Some(0.0)
        } else {
            None
        }
    }
}

/// Samples the dial and commits brightness changes
pub struct DialReader<A: DialInput> {
    input: A,
    config: DialConfig,
}

impl<A: DialInput> DialReader<A> {
    pub const fn new(input: A, config: DialConfig) -> Self {
        Self { input, config }
    }

    /// Read the dial and update the state brightness
    ///
    /// A failed read leaves brightness unchanged for this tick.
    pub fn sample(&mut self, state: &mut AnimationState) {
        let microvolts = match self.input.read_microvolts() {
            Ok(microvolts) => microvolts,
            Err(err) => {
                trace!("[Dial] {}", err);
                return;
            }
        };
        let raw = self.config.raw_brightness(microvolts);
        let current = state.brightness();
        trace!("[Dial] raw {} diff {}", raw, raw - current);
        if let Some(brightness) = self.config.next_brightness(current, raw) {
            state.set_brightness(brightness);
        }
    }
}
