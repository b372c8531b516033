//! Snowfall backdrop for program slides.
//!
//! Flake coordinates are percentages of the host rectangle so the same
//! field can be drawn at any size.

use rand::Rng;

use crate::timer::Interval;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    /// Horizontal position, percent of width.
    pub x: f32,
    /// Vertical position, percent of height.
    pub y: f32,
    /// Diameter in points.
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
}

impl Snowflake {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(-100.0..0.0),
            size: rng.gen_range(2.0..5.0),
            speed: rng.gen_range(1.0..3.0),
            opacity: rng.gen_range(0.2..1.0),
        }
    }

    /// One animation step: falls and drifts right, re-entering from the
    /// top/left edge once fully out of view.
    fn step(&mut self) {
        self.y = if self.y > 110.0 {
            -10.0
        } else {
            self.y + self.speed * 1.2
        };
        self.x = if self.x > 105.0 {
            -5.0
        } else {
            self.x + self.speed * 0.9
        };
    }
}

#[derive(Debug, Clone)]
pub struct Snowfall {
    flakes: Vec<Snowflake>,
    step: Interval,
}

impl Snowfall {
    pub fn new<R: Rng>(rng: &mut R, flake_count: usize, step_period: f64, now: f64) -> Self {
        let flakes = (0..flake_count).map(|_| Snowflake::random(&mut *rng)).collect();
        let mut step = Interval::new(step_period);
        step.arm(now);
        Self { flakes, step }
    }

    /// Builds a field from explicit flakes, stepping from `now`.
    pub fn from_flakes(flakes: Vec<Snowflake>, step_period: f64, now: f64) -> Self {
        let mut step = Interval::new(step_period);
        step.arm(now);
        Self { flakes, step }
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    /// Moves every flake one step when the step period has elapsed.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.step.poll(now) {
            return false;
        }
        for flake in &mut self.flakes {
            flake.step();
        }
        true
    }

    pub fn next_wakeup(&self) -> Option<f64> {
        self.step.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_flakes_start_above_the_field() {
        let mut rng = StdRng::seed_from_u64(42);
        let snow = Snowfall::new(&mut rng, 50, 0.03, 0.0);
        assert_eq!(snow.flakes().len(), 50);
        for flake in snow.flakes() {
            assert!((0.0..100.0).contains(&flake.x));
            assert!((-100.0..0.0).contains(&flake.y));
            assert!((2.0..5.0).contains(&flake.size));
            assert!((0.2..1.0).contains(&flake.opacity));
        }
    }

    #[test]
    fn flakes_fall_and_wrap() {
        let flake = Snowflake {
            x: 10.0,
            y: 20.0,
            size: 3.0,
            speed: 2.0,
            opacity: 1.0,
        };
        let escaped = Snowflake {
            x: 106.0,
            y: 111.0,
            ..flake
        };
        let mut snow = Snowfall::from_flakes(vec![flake, escaped], 0.03, 0.0);

        assert!(!snow.tick(0.01));
        assert!(snow.tick(0.03));

        let moved = snow.flakes()[0];
        assert!((moved.y - 22.4).abs() < 1e-4);
        assert!((moved.x - 11.8).abs() < 1e-4);

        let wrapped = snow.flakes()[1];
        assert_eq!(wrapped.y, -10.0);
        assert_eq!(wrapped.x, -5.0);
    }
}
