//! Shared animation state
//!
//! A single `AnimationState` lives for the whole run of the show. It is
//! owned by the [`LightShow`](crate::LightShow) and only mutated from its
//! tick, so every handler sees a consistent snapshot.

use crate::color::{BLACK, Rgb};

/// Number of strips driven by the show
pub const STRIP_COUNT: usize = 2;

/// Identifies one of the two strips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripSlot {
    First = 0,
    Second = 1,
}

impl StripSlot {
    /// Both slots, in render order
    pub const ALL: [Self; STRIP_COUNT] = [Self::First, Self::Second];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Brightness the show starts with before the dial is first read
pub const DEFAULT_BRIGHTNESS: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    palette_index: usize,
    cursors: [usize; STRIP_COUNT],
    animate: bool,
    reverse: bool,
    on: bool,
    brightness: f32,
    last_color: Rgb,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS)
    }
}

impl AnimationState {
    /// Startup state: first palette, cursors at zero, animating forward, on
    pub const fn new(brightness: f32) -> Self {
        Self {
            palette_index: 0,
            cursors: [0; STRIP_COUNT],
            animate: true,
            reverse: false,
            on: true,
            brightness,
            last_color: BLACK,
        }
    }

    pub const fn palette_index(&self) -> usize {
        self.palette_index
    }

    pub const fn cursor(&self, slot: StripSlot) -> usize {
        self.cursors[slot.index()]
    }

    pub const fn animate(&self) -> bool {
        self.animate
    }

    pub const fn reverse(&self) -> bool {
        self.reverse
    }

    pub const fn is_on(&self) -> bool {
        self.on
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Last color written at a sweep step, used to deduplicate traces
    pub const fn last_color(&self) -> Rgb {
        self.last_color
    }

    /// Make `index` the active palette and restart both sweeps
    pub fn select_palette(&mut self, index: usize) {
        self.palette_index = index;
        self.reset_cursors();
    }

    pub fn reset_cursors(&mut self) {
        self.cursors = [0; STRIP_COUNT];
    }

    /// Set a strip cursor directly
    ///
    /// The caller keeps it inside the active palette.
    pub fn set_cursor(&mut self, slot: StripSlot, cursor: usize) {
        self.cursors[slot.index()] = cursor;
    }

    pub fn toggle_animate(&mut self) {
        self.animate = !self.animate;
    }

    pub fn toggle_reverse(&mut self) {
        self.reverse = !self.reverse;
    }

    /// Switch off: brightness drops to zero so frames render black
    pub fn power_off(&mut self) {
        self.on = false;
        self.brightness = 0.0;
    }

    /// Switch on; brightness is left for the dial to restore
    pub fn power_on(&mut self) {
        self.on = true;
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    pub(crate) fn set_last_color(&mut self, color: Rgb) {
        self.last_color = color;
    }
}
