use palette::Mix;

use crate::strip::PixelStrip;

/// 8 bit per channel color, as pushed out to the LEDs.
pub type Rgb = palette::Srgb<u8>;

pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Linear per-channel interpolation from `a` (alpha 0) to `b` (alpha 1).
///
/// Alpha is expected to be within `[0, 1]`; values outside saturate.
pub fn blend(alpha: f32, a: Rgb, b: Rgb) -> Rgb {
    a.into_format::<f32>()
        .mix(b.into_format(), alpha.clamp(0.0, 1.0))
        .into_format()
}

/// Maps a position onto a six-region color wheel,
/// red -> green -> blue -> red with increasing position.
pub fn hue_wheel(position: u8) -> Rgb {
    let position = 255 - position;

    if position < 85 {
        Rgb::new(255 - position * 3, 0, position * 3)
    } else if position < 170 {
        let position = position - 85;
        Rgb::new(0, position * 3, 255 - position * 3)
    } else {
        let position = position - 170;
        Rgb::new(position * 3, 255 - position * 3, 0)
    }
}

/// Writes `color` into the first `count` pixels. Everything after is left alone.
pub fn flood_fill(strip: &mut dyn PixelStrip, count: usize, color: Rgb) {
    for i in 0..count {
        strip.set_pixel_color(i, color);
    }
}
