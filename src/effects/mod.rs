pub mod aurora;
pub mod criticalpulse;
pub mod staticcolor;
pub mod startupscroll;

pub use aurora::Aurora;
pub use criticalpulse::CriticalPulse;
pub use staticcolor::StaticColor;
pub use startupscroll::StartupScroll;

use crate::color::Rgb;
use crate::strip::PixelStrip;
use crate::valueslider::LitCount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStatus {
    /// The effect painted the strip, nothing after it should run this tick.
    HasBeenProcessed,
    /// The effect stepped aside.
    NotProcessed,
}

/// An effect that may or may not paint the lit part of a strip.
///
/// `base_color` is what the strip would be flood filled with if no effect altered the
/// color. Effects can change `lit_leds` as well, but get handed fresh references on
/// every tick and must not hold on to either.
pub trait PixelEffect {
    fn apply_effect(
        &self,
        strip: &mut dyn PixelStrip,
        lit_leds: &mut dyn LitCount,
        base_color: Rgb,
    ) -> ProcessingStatus;
}
