use std::cell::Cell;
use std::cmp::Ordering;

use crate::color::{blend, flood_fill, Rgb};
use crate::effects::{PixelEffect, ProcessingStatus};
use crate::strip::PixelStrip;
use crate::valueslider::LitCount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollState {
    Idle,
    Running { cursor: usize, current: usize },
}

/// Once triggered, scrolls the light level one pixel per tick through a list of
/// oscillation points, taking over the lit count while it runs.
///
/// The color fades from `start_color` at the first point to the base color at the last
/// one. The progress lives inside the effect, so every strip needs its own instance.
#[derive(Debug)]
pub struct StartupScroll {
    waypoints: Vec<usize>,
    start_color: Rgb,
    state: Cell<ScrollState>,
}

impl StartupScroll {
    pub fn new(start_position: usize, start_color: Rgb) -> StartupScroll {
        StartupScroll {
            waypoints: vec![start_position],
            start_color,
            state: Cell::new(ScrollState::Idle),
        }
    }

    /// Adds a point to scroll to, after all the ones added before it.
    pub fn add_oscillation_point(&mut self, point: usize) -> &mut Self {
        self.waypoints.push(point);
        self
    }

    pub fn waypoints(&self) -> &[usize] {
        &self.waypoints
    }

    /// Starts over from the first point, dropping whatever progress was made.
    pub fn trigger(&self) {
        log::debug!("Startup scroll triggered over {:?}", self.waypoints);
        self.state.set(ScrollState::Running {
            cursor: 0,
            current: self.start_point(),
        });
    }

    pub fn is_running(&self) -> bool {
        self.state.get() != ScrollState::Idle
    }

    fn start_point(&self) -> usize {
        self.waypoints[0]
    }

    fn end_point(&self) -> usize {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Where `current` sits between the first and the last point, in `[0, 1]`.
    fn blend_stop(&self, current: usize) -> f32 {
        let start = self.start_point() as f32;
        let end = self.end_point() as f32;
        if start == end {
            return 1.0;
        }

        ((current as f32 - start) / (end - start)).clamp(0.0, 1.0)
    }
}

impl PixelEffect for StartupScroll {
    fn apply_effect(
        &self,
        strip: &mut dyn PixelStrip,
        lit_leds: &mut dyn LitCount,
        base_color: Rgb,
    ) -> ProcessingStatus {
        let (mut cursor, mut current) = match self.state.get() {
            ScrollState::Idle => return ProcessingStatus::NotProcessed,
            ScrollState::Running { cursor, current } => (cursor, current),
        };

        debug_assert!(cursor < self.waypoints.len());

        if current == self.waypoints[cursor] {
            cursor += 1;
            if cursor >= self.waypoints.len() {
                log::debug!("Startup scroll finished at {current}");
                self.state.set(ScrollState::Idle);
                return ProcessingStatus::NotProcessed;
            }
        }

        let target = self.waypoints[cursor];
        match current.cmp(&target) {
            Ordering::Less => current += 1,
            Ordering::Greater => current -= 1,
            Ordering::Equal => debug_assert_ne!(
                current, target,
                "oscillation point {cursor} repeats the one before it"
            ),
        }
        self.state.set(ScrollState::Running { cursor, current });
        lit_leds.set_value(current);

        let mix_color = blend(self.blend_stop(current), self.start_color, base_color);
        flood_fill(strip, current, mix_color);

        ProcessingStatus::HasBeenProcessed
    }
}
