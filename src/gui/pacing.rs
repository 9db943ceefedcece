use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate and keeps a smoothed FPS estimate.
pub struct FpsLimiter {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl FpsLimiter {
    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    pub fn sleep(&mut self, max_fps: f64) {
        let before_wait = self.frame_timer.elapsed();

        if max_fps > 0. {
            let target_frametime = Duration::from_secs_f64(1. / max_fps);
            if target_frametime > before_wait {
                sleep(target_frametime - before_wait);
            }
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}

/// Decides when the simulation is due for its next tick.
///
/// Decoupled from the frame rate: at 60 FPS and 5 ticks per second
/// most frames only redraw.
pub struct TickClock {
    last_tick: Instant,
}

impl Default for TickClock {
    fn default() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }
}

impl TickClock {
    const MIN_TICKS_PER_SECOND: f64 = 0.1;

    pub fn interval(ticks_per_second: f64) -> Duration {
        Duration::from_secs_f64(1. / ticks_per_second.max(Self::MIN_TICKS_PER_SECOND))
    }

    /// Returns `true` and restarts the clock if a tick interval has elapsed.
    pub fn poll(&mut self, ticks_per_second: f64) -> bool {
        self.poll_at(Instant::now(), ticks_per_second)
    }

    fn poll_at(&mut self, now: Instant, ticks_per_second: f64) -> bool {
        if now.saturating_duration_since(self.last_tick) < Self::interval(ticks_per_second) {
            return false;
        }
        self.last_tick = now;
        true
    }

    pub fn restart(&mut self) {
        self.last_tick = Instant::now();
    }
}
