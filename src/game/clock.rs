/// Converts the frame scheduler's monotonic timestamps into discrete
/// simulation ticks.
pub struct StepGate {
    last_tick_ms: Option<f64>,
}

impl StepGate {
    pub fn new() -> Self {
        Self { last_tick_ms: None }
    }

    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.last_tick_ms = None;
    }

    /// Non-accumulating: on fire the reference jumps to `now_ms`, so a late
    /// frame dilates time rather than producing a catch-up burst. The first
    /// call after (re)start only primes the reference.
    pub fn should_step(&mut self, now_ms: f64, speed: f32) -> bool {
        let last = match self.last_tick_ms {
            Some(last) => last,
            None => {
                self.last_tick_ms = Some(now_ms);
                return false;
            }
        };

        let period_ms = 1000.0 / (speed as f64 / 10.0);
        if now_ms - last > period_ms {
            self.last_tick_ms = Some(now_ms);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_primes_without_firing() {
        let mut gate = StepGate::new();
        assert!(!gate.should_step(1000.0, 50.0));
        // period is 200ms at speed 50
        assert!(!gate.should_step(1100.0, 50.0));
        assert!(!gate.should_step(1200.0, 50.0));
        assert!(gate.should_step(1201.0, 50.0));
    }

    #[test]
    fn reference_jumps_to_fire_time() {
        let mut gate = StepGate::new();
        gate.should_step(0.0, 50.0);

        // A late frame: the next window is measured from 250, not from 200.
        assert!(gate.should_step(250.0, 50.0));
        assert!(!gate.should_step(420.0, 50.0));
        assert!(gate.should_step(460.0, 50.0));
    }

    #[test]
    fn higher_speed_shortens_the_period() {
        let mut gate = StepGate::new();
        gate.should_step(0.0, 100.0);
        assert!(!gate.should_step(100.0, 100.0));
        assert!(gate.should_step(101.0, 100.0));
    }

    #[test]
    fn reset_reprimes() {
        let mut gate = StepGate::new();
        gate.should_step(0.0, 50.0);
        assert!(gate.should_step(300.0, 50.0));

        gate.reset();
        assert!(!gate.should_step(10_000.0, 50.0));
        assert!(gate.should_step(10_201.0, 50.0));
    }
}
