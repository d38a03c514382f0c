use std::thread;
use std::time::{Duration, Instant};

/// Paces the render loop at a fixed refresh rate.
pub struct IntervalTimer {
    interval: Duration,
    last_tick: Instant,
    measure_fps: bool,
    last_fps_print: Instant,
    frames: u32,
}

impl IntervalTimer {
    pub fn new(freq_hz: f32, measure_fps: bool) -> IntervalTimer {
        let interval = if freq_hz > 0.0 {
            Duration::from_secs_f64(1.0 / freq_hz as f64)
        } else {
            Duration::ZERO
        };

        IntervalTimer {
            interval,
            last_tick: Instant::now(),
            measure_fps,
            last_fps_print: Instant::now(),
            frames: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn sleep_until_next_tick(&mut self) {
        if self.measure_fps {
            self.update_fps();
        }

        let next_tick = self.next_tick(Instant::now());
        thread::sleep(next_tick.saturating_duration_since(Instant::now()));
        self.last_tick = next_tick;
    }

    /// When the next frame is due. A frame that is already late is dropped and the
    /// schedule restarts from `now`.
    fn next_tick(&self, now: Instant) -> Instant {
        let due = self.last_tick + self.interval;
        if due > now {
            return due;
        }

        if !self.interval.is_zero() {
            log::warn!("Render loop skipped a frame");
        }
        now + self.interval
    }

    fn update_fps(&mut self) {
        self.frames += 1;

        if self.last_fps_print.elapsed() > Duration::from_secs(1) {
            log::debug!("FPS: {}", self.frames);
            self.frames = 0;
            self.last_fps_print = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_from_frequency() {
        assert_eq!(
            IntervalTimer::new(50.0, false).interval(),
            Duration::from_millis(20)
        );
        assert_eq!(IntervalTimer::new(0.0, false).interval(), Duration::ZERO);
    }

    #[test]
    fn next_tick_keeps_schedule() {
        let timer = IntervalTimer::new(50.0, false);
        let now = timer.last_tick + Duration::from_millis(5);

        assert_eq!(timer.next_tick(now), timer.last_tick + Duration::from_millis(20));
    }

    #[test]
    fn late_frame_restarts_schedule() {
        let timer = IntervalTimer::new(50.0, false);
        let now = timer.last_tick + Duration::from_millis(35);

        assert_eq!(timer.next_tick(now), now + Duration::from_millis(20));
    }

    #[test]
    fn zero_interval_never_waits() {
        let timer = IntervalTimer::new(0.0, false);
        let now = timer.last_tick + Duration::from_millis(1);

        assert_eq!(timer.next_tick(now), now);
    }

    #[test]
    fn sleeps_roughly_one_interval() {
        let mut timer = IntervalTimer::new(100.0, true);
        let started = Instant::now();

        timer.sleep_until_next_tick();
        timer.sleep_until_next_tick();

        assert!(started.elapsed() >= Duration::from_millis(15));
    }
}
