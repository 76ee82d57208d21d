#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterState {
    pub target: u32,
    pub current: u32,
    pub step: u32,
}

impl CounterState {
    /// `divisions` is how many ticks a large target takes to reach; small
    /// targets fall back to a step of one.
    pub fn new(target: u32, divisions: u32) -> Self {
        let step = (target / divisions.max(1)).max(1);
        Self {
            target,
            current: 0,
            step,
        }
    }

    /// Keeps progress while the target is unchanged, restarts from zero otherwise.
    pub fn retarget(self, target: u32, divisions: u32) -> Self {
        if self.target == target {
            self
        } else {
            Self::new(target, divisions)
        }
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    /// Advances one tick, clamping at the target. Returns true once finished.
    pub fn tick(&mut self) -> bool {
        if !self.is_done() {
            self.current = self.current.saturating_add(self.step).min(self.target);
        }
        self.is_done()
    }

    pub fn label(&self, suffix: &str) -> String {
        format!("{}{}", self.current, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_to_250_in_125_ticks() {
        let mut counter = CounterState::new(250, 100);
        assert_eq!(counter.step, 2);

        let mut seen = vec![counter.current];
        let mut ticks = 0;
        while !counter.tick() {
            ticks += 1;
            seen.push(counter.current);
            assert!(counter.current <= 250);
        }
        ticks += 1;
        seen.push(counter.current);

        assert_eq!(ticks, 125);
        assert_eq!(seen, (0..=250).step_by(2).collect::<Vec<_>>());
    }

    #[test]
    fn uneven_step_clamps_at_target() {
        let mut counter = CounterState::new(1050, 100);
        assert_eq!(counter.step, 10);
        while !counter.tick() {}
        assert_eq!(counter.current, 1050);
        assert!(counter.tick());
        assert_eq!(counter.current, 1050);
    }

    #[test]
    fn small_targets_step_by_one() {
        let mut counter = CounterState::new(7, 100);
        assert_eq!(counter.step, 1);
        let mut ticks = 0;
        while !counter.tick() {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 7);
    }

    #[test]
    fn zero_target_is_already_done() {
        let mut counter = CounterState::new(0, 100);
        assert!(counter.is_done());
        assert!(counter.tick());
        assert_eq!(counter.label("+"), "0+");
    }

    #[test]
    fn retarget_restarts_only_on_a_new_target() {
        let mut counter = CounterState::new(250, 100);
        counter.tick();
        assert_eq!(counter.retarget(250, 100), counter);

        let fresh = counter.retarget(500, 100);
        assert_eq!(fresh.current, 0);
        assert_eq!(fresh.step, 5);
        assert_eq!(fresh.target, 500);
    }

    #[test]
    fn label_appends_suffix() {
        let mut counter = CounterState::new(98, 100);
        counter.tick();
        assert_eq!(counter.label("%"), "1%");
    }
}
