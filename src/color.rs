use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Pure black, used for switched-off and masked pixels
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Scale a color by a brightness factor
///
/// Each channel becomes `floor(channel * brightness)`, saturated into
/// `0..=255`. Negative brightness renders black.
#[inline]
pub fn scale_color(color: Rgb, brightness: f32) -> Rgb {
    let brightness = brightness.max(0.0);
    Rgb {
        r: scale_channel(color.r, brightness),
        g: scale_channel(color.g, brightness),
        b: scale_channel(color.b, brightness),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, brightness: f32) -> u8 {
    libm::floorf(f32::from(value) * brightness).clamp(0.0, 255.0) as u8
}

/// Returns true if every channel is strictly below `cutoff`
#[inline]
pub const fn is_darker_than(color: Rgb, cutoff: u8) -> bool {
    color.r < cutoff && color.g < cutoff && color.b < cutoff
}
