#![no_std]

mod log;

pub mod button;
pub mod color;
pub mod config;
pub mod dial;
pub mod error;
pub mod input;
pub mod palette;
pub mod renderer;
pub mod show;
pub mod state;

pub use button::{Button, ButtonGesture, Debouncer, watch_button};
pub use config::{ButtonConfig, DialConfig, ShowConfig, StripConfig};
pub use dial::{DialInput, DialReader};
pub use error::{ConfigError, DialReadError, QueueFull, TransmitError};
pub use input::{ButtonBinding, INPUT_QUEUE_SIZE, InputEvent, InputQueue};
pub use palette::{DEFAULT_PALETTES, Palette, PaletteCollection};
pub use renderer::Renderer;
pub use show::LightShow;
pub use state::{AnimationState, STRIP_COUNT, StripSlot};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver
///
/// Implement this trait to push frames to the physical strips. The light
/// show is generic over it.
pub trait OutputDriver {
    /// Write colors to the strip in `slot`
    fn write(&mut self, slot: StripSlot, colors: &[Rgb]) -> Result<(), TransmitError>;
}
