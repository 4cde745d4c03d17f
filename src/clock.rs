// clock.rs — deterministic frame counter driving the comparison animation.

use std::time::Duration;

/// Target visual tick rate. The counter advances by exactly one per tick
/// regardless of real elapsed time, so tests drive it by calling
/// [`AnimationClock::tick`] N times and asserting exact output.
pub const TICK_RATE: f64 = 30.0;

pub fn tick_interval() -> Duration {
    Duration::from_secs_f64(1.0 / TICK_RATE)
}

/// Monotonically increasing frame counter owned by one visualization
/// instance. It resets only by constructing a new clock; the wrap into a
/// cycle happens in [`AnimationClock::phase`], never on the counter itself.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    frame: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame and return the frame to draw, starting at 0.
    pub fn tick(&mut self) -> u64 {
        let frame = self.frame;
        self.frame += 1;
        frame
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Position within one repeating cycle, in [0,1).
    pub fn phase(&self, cycle_len: u64) -> f32 {
        phase_of(self.frame, cycle_len)
    }
}

/// `frame mod cycle / cycle` as a real number in [0,1).
pub fn phase_of(frame: u64, cycle_len: u64) -> f32 {
    (frame % cycle_len) as f32 / cycle_len as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_count_from_zero() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn phase_is_periodic() {
        for cycle in [60u64, 90] {
            for frame in [0u64, 1, 37, 89, 90, 1234] {
                assert_eq!(phase_of(frame, cycle), phase_of(frame + cycle, cycle));
            }
        }
    }

    #[test]
    fn phase_stays_below_one() {
        for frame in 0..200u64 {
            let p = phase_of(frame, 90);
            assert!((0.0..1.0).contains(&p), "phase {p} out of range at {frame}");
        }
    }

    #[test]
    fn new_clock_starts_over() {
        let mut clock = AnimationClock::new();
        for _ in 0..17 {
            clock.tick();
        }
        let fresh = AnimationClock::new();
        assert_eq!(fresh.frame(), 0);
        assert_eq!(clock.frame(), 17);
    }
}
