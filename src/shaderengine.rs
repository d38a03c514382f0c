use crate::color::Rgb;
use crate::effects::{PixelEffect, ProcessingStatus};
use crate::strip::PixelStrip;
use crate::valueslider::LitCount;

/// Runs at most one effect per tick: the first one, in the order they were added,
/// that decides to process the strip.
///
/// The engine only borrows its effects; they have to outlive it.
#[derive(Default)]
pub struct PriorityShaderEngine<'a> {
    effects: Vec<&'a dyn PixelEffect>,
}

impl<'a> PriorityShaderEngine<'a> {
    pub fn new() -> PriorityShaderEngine<'a> {
        PriorityShaderEngine { effects: vec![] }
    }

    /// Queues an effect behind all the ones added before it.
    pub fn add_pixel_effect(&mut self, effect: &'a dyn PixelEffect) -> &mut Self {
        self.effects.push(effect);
        self
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn shade_pixels<'s, S, L>(
        &self,
        strip: &'s mut S,
        lit_leds: &mut L,
        base_color: Rgb,
    ) -> &'s mut S
    where
        S: PixelStrip,
        L: LitCount,
    {
        for (slot, effect) in self.effects.iter().enumerate() {
            let status = effect.apply_effect(&mut *strip, &mut *lit_leds, base_color);
            if status == ProcessingStatus::HasBeenProcessed {
                log::trace!("Effect {slot} processed the strip");
                return strip;
            }
        }

        log::trace!("No effect processed the strip");
        strip
    }
}
