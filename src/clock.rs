//! Fixed-rate frame clock.

use std::time::{Duration, Instant};

/// Throttles the main loop to a fixed frame rate and provides a millisecond
/// clock for spawn timing.
pub struct FrameClock {
    start: Instant,
    frame: Duration,
    next_frame: Instant,
    pub frame_count: u64,
}

impl FrameClock {
    pub fn new(fps: u64) -> Self {
        let start = Instant::now();
        let frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self {
            start,
            frame,
            next_frame: start + frame,
            frame_count: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Milliseconds since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Sleep until the current frame's deadline and schedule the next one.
    ///
    /// Returns how late the frame finished. When more than a whole frame
    /// behind, the schedule restarts from now instead of running extra
    /// frames to catch up.
    pub fn wait_for_next_frame(&mut self) -> Duration {
        let now = Instant::now();
        let lag = if now < self.next_frame {
            std::thread::sleep(self.next_frame - now);
            self.next_frame += self.frame;
            Duration::ZERO
        } else {
            let lag = now - self.next_frame;
            if lag > self.frame {
                log::warn!(
                    "Frame {} ran {:.1}ms over budget, resetting schedule",
                    self.frame_count,
                    lag.as_secs_f64() * 1000.0
                );
                self.next_frame = now + self.frame;
            } else {
                self.next_frame += self.frame;
            }
            lag
        };
        self.frame_count += 1;
        lag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_for_60_fps() {
        let clock = FrameClock::new(60);
        let ms = clock.frame_duration().as_secs_f64() * 1000.0;
        assert!((ms - 16.667).abs() < 0.01);
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_throttles_to_frame_rate() {
        let mut clock = FrameClock::new(100);
        let started = Instant::now();
        for _ in 0..3 {
            clock.wait_for_next_frame();
        }
        assert!(started.elapsed() >= Duration::from_millis(25));
        assert_eq!(clock.frame_count, 3);
    }

    #[test]
    fn test_late_frame_reports_lag_and_resets() {
        let mut clock = FrameClock::new(100);
        std::thread::sleep(Duration::from_millis(40));
        let lag = clock.wait_for_next_frame();
        assert!(lag >= Duration::from_millis(20));

        // The next frame is scheduled from now, not from the missed deadline
        let started = Instant::now();
        let lag = clock.wait_for_next_frame();
        assert_eq!(lag, Duration::ZERO);
        assert!(started.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_now_ms_advances() {
        let clock = FrameClock::new(60);
        std::thread::sleep(Duration::from_millis(5));
        assert!(clock.now_ms() >= 5);
    }
}
