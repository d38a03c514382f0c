use crate::color::{blend, hue_wheel, Rgb};
use crate::cyclecounter::PhaseSource;
use crate::effects::{PixelEffect, ProcessingStatus};
use crate::strip::PixelStrip;
use crate::valueslider::LitCount;

pub const DEFAULT_RAINBOW_LENGTH: usize = 12;
const RAINBOW_ALPHA: f32 = 0.5;

/// Rainbow tinted with the base color, moving down the strip as the phase advances.
/// Only kicks in once at least `min_lit_pixels` are lit.
pub struct Aurora<P> {
    min_lit_pixels: usize,
    cycle_counter: P,
    wheel_advance_per_led: u8,
}

impl<P: PhaseSource> Aurora<P> {
    pub fn new(min_lit_pixels: usize, cycle_counter: P) -> Aurora<P> {
        Aurora {
            min_lit_pixels,
            cycle_counter,
            wheel_advance_per_led: wheel_advance(DEFAULT_RAINBOW_LENGTH),
        }
    }

    /// Number of pixels one full turn of the color wheel is spread over.
    pub fn with_rainbow_length(mut self, rainbow_length: usize) -> Aurora<P> {
        self.wheel_advance_per_led = wheel_advance(rainbow_length);
        self
    }
}

fn wheel_advance(rainbow_length: usize) -> u8 {
    (255.0 / rainbow_length.max(1) as f32) as u8
}

impl<P: PhaseSource> PixelEffect for Aurora<P> {
    fn apply_effect(
        &self,
        strip: &mut dyn PixelStrip,
        lit_leds: &mut dyn LitCount,
        base_color: Rgb,
    ) -> ProcessingStatus {
        let lit_pixels = lit_leds.value();
        if lit_pixels < self.min_lit_pixels {
            return ProcessingStatus::NotProcessed;
        }

        let offset = (self.cycle_counter.unidirectional_value() * 255.0) as u8;
        for j in 0..lit_pixels {
            // Wraps around the wheel on purpose
            let position = offset.wrapping_add((j as u8).wrapping_mul(self.wheel_advance_per_led));
            strip.set_pixel_color(j, blend(RAINBOW_ALPHA, base_color, hue_wheel(position)));
        }

        ProcessingStatus::HasBeenProcessed
    }
}
