//! Palette chase renderer
//!
//! Each strip shows the active palette repeated along its length, starting
//! at the strip's cursor. Advancing the cursor every frame makes the
//! colors chase along the strip.

use crate::OutputDriver;
use crate::color::{BLACK, Rgb, is_darker_than, scale_color};
use crate::config::StripConfig;
use crate::error::ConfigError;
use crate::log::trace;
use crate::palette::PaletteCollection;
use crate::state::{AnimationState, STRIP_COUNT, StripSlot};

/// Frame buffer of a single strip
#[derive(Debug, Clone)]
struct Strip<const MAX_LEDS: usize> {
    config: StripConfig,
    buffer: [Rgb; MAX_LEDS],
}

impl<const MAX_LEDS: usize> Strip<MAX_LEDS> {
    const fn new(config: StripConfig) -> Self {
        Self {
            config,
            buffer: [BLACK; MAX_LEDS],
        }
    }

    /// Pixels that exist on the physical strip
    fn pixels(&self) -> &[Rgb] {
        &self.buffer[..self.config.led_count]
    }

    fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.buffer[..self.config.led_count]
    }
}

/// Cursor value for the next frame
///
/// Moving in reverse walks up the palette, otherwise down; both wrap.
pub const fn advance_cursor(cursor: usize, len: usize, reverse: bool) -> usize {
    if reverse {
        if cursor + 1 < len { cursor + 1 } else { 0 }
    } else if cursor > 0 {
        cursor - 1
    } else {
        len - 1
    }
}

/// Renderer for both strips
pub struct Renderer<const MAX_LEDS: usize> {
    strips: [Strip<MAX_LEDS>; STRIP_COUNT],
}

impl<const MAX_LEDS: usize> Renderer<MAX_LEDS> {
    /// Create a renderer, rejecting strips that do not fit `MAX_LEDS`
    pub fn new(strips: &[StripConfig; STRIP_COUNT]) -> Result<Self, ConfigError> {
        for slot in StripSlot::ALL {
            strips[slot.index()].check::<MAX_LEDS>(slot)?;
        }
        Ok(Self {
            strips: [Strip::new(strips[0]), Strip::new(strips[1])],
        })
    }

    /// Last rendered frame of a strip
    pub fn frame(&self, slot: StripSlot) -> &[Rgb] {
        self.strips[slot.index()].pixels()
    }

    /// Render both strips
    ///
    /// The direction flag flips after every strip, so the strips always
    /// run in opposite directions and each strip changes direction every
    /// pass. A user toggle of the direction composes with this.
    pub fn render_pass<O: OutputDriver>(
        &mut self,
        state: &mut AnimationState,
        palettes: &PaletteCollection,
        output: &mut O,
    ) {
        for slot in StripSlot::ALL {
            self.render_strip(slot, state, palettes, output);
            state.toggle_reverse();
        }
    }

    /// Render one strip and send it to the output
    pub fn render_strip<O: OutputDriver>(
        &mut self,
        slot: StripSlot,
        state: &mut AnimationState,
        palettes: &PaletteCollection,
        output: &mut O,
    ) {
        let palette = palettes.get(state.palette_index());
        let len = palette.len();
        let brightness = state.brightness();

        let mut index = 0;
        if state.animate() {
            let cursor = state.cursor(slot) % len;
            index = cursor;
            state.set_cursor(slot, advance_cursor(cursor, len, state.reverse()));
        }

        let strip = &mut self.strips[slot.index()];
        let dark_cutoff = strip.config.dark_cutoff;
        for pixel in strip.pixels_mut() {
            let color = scale_color(palette.colors[index], brightness);
            *pixel = match dark_cutoff {
                Some(cutoff) if is_darker_than(color, cutoff) => BLACK,
                _ => color,
            };
            if color != state.last_color() {
                trace!("[Renderer] color {:?}", color);
                state.set_last_color(color);
            }
            index = if index + 1 < len { index + 1 } else { 0 };
        }

        if let Err(err) = output.write(slot, strip.pixels()) {
            trace!("[Renderer] strip {} frame dropped: {}", slot.index(), err);
        }
    }
}
