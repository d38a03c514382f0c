use crate::color::{blend, flood_fill, Rgb, RED};
use crate::cyclecounter::PhaseSource;
use crate::effects::{PixelEffect, ProcessingStatus};
use crate::strip::PixelStrip;
use crate::valueslider::LitCount;

/// How red the lit pixels get at the peak of the pulse.
const MAX_ALPHA: f32 = 0.85;

/// Pulses the lit pixels red once no more than `max_lit_pixels` are lit.
pub struct CriticalPulse<P> {
    max_lit_pixels: usize,
    cycle_counter: P,
}

impl<P: PhaseSource> CriticalPulse<P> {
    pub fn new(max_lit_pixels: usize, cycle_counter: P) -> CriticalPulse<P> {
        CriticalPulse {
            max_lit_pixels,
            cycle_counter,
        }
    }
}

impl<P: PhaseSource> PixelEffect for CriticalPulse<P> {
    fn apply_effect(
        &self,
        strip: &mut dyn PixelStrip,
        lit_leds: &mut dyn LitCount,
        base_color: Rgb,
    ) -> ProcessingStatus {
        let lit_pixels = lit_leds.value();
        if lit_pixels > self.max_lit_pixels {
            return ProcessingStatus::NotProcessed;
        }

        let pulse_alpha = self.cycle_counter.oscillating_value() * MAX_ALPHA;
        flood_fill(strip, lit_pixels, blend(pulse_alpha, base_color, RED));

        ProcessingStatus::HasBeenProcessed
    }
}
