//! Palette store
//!
//! Palettes are fixed color sequences. The order of colors is the order
//! in which the chase sweeps along a strip.

use crate::color::Rgb;
use crate::error::ConfigError;

/// A named, ordered color sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [Rgb],
}

impl Palette {
    pub const fn new(name: &'static str, colors: &'static [Rgb]) -> Self {
        Self { name, colors }
    }

    /// Number of colors in the sweep
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

const GUMMY_WORM: [Rgb; 16] = [
    rgb(247, 2, 2),
    rgb(247, 47, 2),
    rgb(247, 149, 2),
    rgb(222, 247, 2),
    rgb(59, 247, 2),
    rgb(2, 247, 112),
    rgb(2, 247, 231),
    rgb(2, 108, 247),
    rgb(2, 10, 247),
    rgb(75, 2, 247),
    rgb(149, 2, 247),
    rgb(194, 2, 247),
    rgb(247, 2, 223),
    rgb(247, 2, 169),
    rgb(247, 2, 116),
    rgb(247, 2, 59),
];

const TRANS_PRIDE: [Rgb; 4] = [
    rgb(255, 255, 255),
    rgb(2, 186, 247),
    rgb(247, 2, 239),
    rgb(2, 186, 247),
];

const PAN_PRIDE: [Rgb; 3] = [rgb(255, 2, 2), rgb(243, 247, 2), rgb(2, 80, 247)];

const WHITE: [Rgb; 1] = [rgb(255, 255, 255)];

/// Palettes shipped with the device, in button cycling order
pub static DEFAULT_PALETTES: [Palette; 4] = [
    Palette::new("gummy_worm", &GUMMY_WORM),
    Palette::new("trans_pride", &TRANS_PRIDE),
    Palette::new("pan_pride", &PAN_PRIDE),
    Palette::new("white", &WHITE),
];

/// Non-empty collection of non-empty palettes, addressed by a cyclic index
#[derive(Debug, Clone, Copy)]
pub struct PaletteCollection {
    palettes: &'static [Palette],
}

impl PaletteCollection {
    /// Validate and wrap a palette list
    pub fn new(palettes: &'static [Palette]) -> Result<Self, ConfigError> {
        if palettes.is_empty() {
            return Err(ConfigError::NoPalettes);
        }
        if let Some(index) = palettes.iter().position(Palette::is_empty) {
            return Err(ConfigError::EmptyPalette { index });
        }
        Ok(Self { palettes })
    }

    pub const fn len(&self) -> usize {
        self.palettes.len()
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Palette at `index`, wrapped into range
    pub fn get(&self, index: usize) -> &Palette {
        &self.palettes[index % self.palettes.len()]
    }

    /// Index following `index`, wrapping to the first palette
    pub const fn next_index(&self, index: usize) -> usize {
        if index + 1 < self.palettes.len() {
            index + 1
        } else {
            0
        }
    }

    /// Index preceding `index`, wrapping to the last palette
    pub const fn prev_index(&self, index: usize) -> usize {
        if index > 0 && index <= self.palettes.len() {
            index - 1
        } else {
            self.palettes.len() - 1
        }
    }

    /// Look a palette up by name
    pub fn find(&self, name: &str) -> Option<usize> {
        self.palettes.iter().position(|palette| palette.name == name)
    }
}

impl Default for PaletteCollection {
    fn default() -> Self {
        Self {
            palettes: &DEFAULT_PALETTES,
        }
    }
}
