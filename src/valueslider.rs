/// Source of the number of LEDs that should be lit.
pub trait LitCount {
    fn value(&self) -> usize;
    fn set_value(&mut self, value: usize);
}

/// A value that is kept inside `[min, max]` no matter what is written to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSlider {
    min: usize,
    max: usize,
    value: usize,
}

impl ValueSlider {
    pub fn new(min: usize, max: usize, value: usize) -> ValueSlider {
        debug_assert!(min <= max, "slider range {min}..={max} is empty");
        let max = max.max(min);

        ValueSlider {
            min,
            max,
            value: value.clamp(min, max),
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Moves the value by `delta`, stopping at the range bounds.
    pub fn nudge(&mut self, delta: isize) {
        let value = self.value.saturating_add_signed(delta);
        self.set_value(value);
    }
}

impl LitCount for ValueSlider {
    fn value(&self) -> usize {
        self.value
    }

    fn set_value(&mut self, value: usize) {
        self.value = value.clamp(self.min, self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_value_is_clamped() {
        assert_eq!(ValueSlider::new(2, 10, 0).value(), 2);
        assert_eq!(ValueSlider::new(2, 10, 50).value(), 10);
        assert_eq!(ValueSlider::new(2, 10, 7).value(), 7);
    }

    #[test]
    fn writes_are_clamped() {
        let mut slider = ValueSlider::new(0, 60, 30);

        slider.set_value(61);
        assert_eq!(slider.value(), 60);

        slider.set_value(0);
        assert_eq!(slider.value(), 0);
    }

    #[test]
    fn nudge_stops_at_bounds() {
        let mut slider = ValueSlider::new(0, 3, 1);

        slider.nudge(-5);
        assert_eq!(slider.value(), 0);

        slider.nudge(2);
        assert_eq!(slider.value(), 2);

        slider.nudge(isize::MAX);
        assert_eq!(slider.value(), 3);
    }
}
