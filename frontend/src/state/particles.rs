#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

const SIZE_PX: (f64, f64) = (2.0, 6.0);
const DURATION_S: (f64, f64) = (10.0, 30.0);
const DELAY_S: (f64, f64) = (0.0, 5.0);

fn between((lo, hi): (f64, f64), unit: f64) -> f64 {
    lo + (hi - lo) * unit.clamp(0.0, 1.0)
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left, self.top, self.size, self.size, self.duration, self.delay
        )
    }
}

/// `random` yields values in `[0, 1)`, e.g. `Math.random`.
pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left: between((0.0, 100.0), random()),
            top: between((0.0, 100.0), random()),
            size: between(SIZE_PX, random()),
            duration: between(DURATION_S, random()),
            delay: between(DELAY_S, random()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatters_requested_count_within_bounds() {
        let mut seed = 0.0_f64;
        let particles = scatter(40, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });
        assert_eq!(particles.len(), 40);
        for p in &particles {
            assert!((0.0..=100.0).contains(&p.left));
            assert!((0.0..=100.0).contains(&p.top));
            assert!((SIZE_PX.0..=SIZE_PX.1).contains(&p.size));
            assert!((DURATION_S.0..=DURATION_S.1).contains(&p.duration));
            assert!((DELAY_S.0..=DELAY_S.1).contains(&p.delay));
        }
    }

    #[test]
    fn style_renders_position_and_timing() {
        let p = scatter(1, || 0.5).remove(0);
        assert_eq!(
            p.style(),
            "left: 50.00%; top: 50.00%; width: 4.0px; height: 4.0px; animation-duration: 20.00s; animation-delay: 2.50s;"
        );
    }
}
