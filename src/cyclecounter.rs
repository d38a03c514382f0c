use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Time-driven phase values effects animate with.
pub trait PhaseSource {
    /// Saw tooth in `[0, 1)`, wrapping back to 0 once per period.
    fn unidirectional_value(&self) -> f32;

    /// Triangle in `[0, 1]`, 0 at the start of a period and 1 halfway through.
    fn oscillating_value(&self) -> f32;
}

impl<P: PhaseSource + ?Sized> PhaseSource for &P {
    fn unidirectional_value(&self) -> f32 {
        (**self).unidirectional_value()
    }

    fn oscillating_value(&self) -> f32 {
        (**self).oscillating_value()
    }
}

impl<P: PhaseSource + ?Sized> PhaseSource for Rc<P> {
    fn unidirectional_value(&self) -> f32 {
        (**self).unidirectional_value()
    }

    fn oscillating_value(&self) -> f32 {
        (**self).oscillating_value()
    }
}

impl<P: PhaseSource + ?Sized> PhaseSource for Arc<P> {
    fn unidirectional_value(&self) -> f32 {
        (**self).unidirectional_value()
    }

    fn oscillating_value(&self) -> f32 {
        (**self).oscillating_value()
    }
}

/// Counts through a fixed period, starting when it is created.
#[derive(Debug, Clone)]
pub struct CycleCounter {
    period: Duration,
    started: Instant,
}

impl CycleCounter {
    pub fn new(period: Duration) -> CycleCounter {
        CycleCounter {
            period,
            started: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn unidirectional_at(&self, elapsed: Duration) -> f32 {
        if self.period.is_zero() {
            return 0.0;
        }

        let period = self.period.as_nanos();
        let value = (elapsed.as_nanos() % period) as f64 / period as f64;
        // f64 -> f32 may round 0.99999999 up to 1.0
        (value as f32).min(1.0 - f32::EPSILON)
    }

    pub fn oscillating_at(&self, elapsed: Duration) -> f32 {
        triangle(self.unidirectional_at(elapsed))
    }
}

impl PhaseSource for CycleCounter {
    fn unidirectional_value(&self) -> f32 {
        self.unidirectional_at(self.started.elapsed())
    }

    fn oscillating_value(&self) -> f32 {
        self.oscillating_at(self.started.elapsed())
    }
}

fn triangle(phase: f32) -> f32 {
    1.0 - (2.0 * phase - 1.0).abs()
}

/// Phase source that never moves.
#[cfg(test)]
pub(crate) struct FixedPhase {
    pub unidirectional: f32,
    pub oscillating: f32,
}

#[cfg(test)]
impl PhaseSource for FixedPhase {
    fn unidirectional_value(&self) -> f32 {
        self.unidirectional
    }

    fn oscillating_value(&self) -> f32 {
        self.oscillating
    }
}
