use crate::color::{flood_fill, Rgb};
use crate::effects::{PixelEffect, ProcessingStatus};
use crate::strip::PixelStrip;
use crate::valueslider::LitCount;

/// Plain base color over the lit pixels. Always applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticColor;

impl StaticColor {
    pub fn new() -> StaticColor {
        StaticColor
    }
}

impl PixelEffect for StaticColor {
    fn apply_effect(
        &self,
        strip: &mut dyn PixelStrip,
        lit_leds: &mut dyn LitCount,
        base_color: Rgb,
    ) -> ProcessingStatus {
        flood_fill(strip, lit_leds.value(), base_color);
        ProcessingStatus::HasBeenProcessed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;
    use crate::strip::PixelBuffer;
    use crate::valueslider::ValueSlider;

    #[test]
    fn fills_exactly_the_lit_pixels() {
        let color = Rgb::new(10, 20, 30);

        for lit in [0, 1, 7, 16] {
            let mut strip = PixelBuffer::new(16);
            let mut slider = ValueSlider::new(0, 16, lit);

            let status = StaticColor::new().apply_effect(&mut strip, &mut slider, color);

            assert_eq!(status, ProcessingStatus::HasBeenProcessed);
            assert!(strip.pixels()[..lit].iter().all(|p| *p == color));
            assert!(strip.pixels()[lit..].iter().all(|p| *p == BLACK));
            assert_eq!(slider.value(), lit);
        }
    }
}
