use std::f64::consts::TAU;

use glam::DVec3;

use crate::bodies::{self, PLANET_COUNT};

/// One orbiting body: fixed orbit parameters plus its current angle.
///
/// Angles are kept in `f64`; positions convert to `f32` only at the render
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    /// Distance from the Sun at which the circular orbit lies.
    pub orbit_radius: f64,
    /// Radians advanced per tick.
    pub angular_speed: f64,
    /// Fixed color assigned at construction.
    pub color: [f32; 3],
    /// Current orbital angle in radians, `[0, 2π)` between ticks.
    pub angle: f64,
}

impl Planet {
    /// Position on the orbit in the local XZ plane, before the system tilt.
    pub fn position(&self) -> DVec3 {
        DVec3::new(
            self.orbit_radius * self.angle.cos(),
            0.0,
            self.orbit_radius * self.angle.sin(),
        )
    }
}

/// The whole animated scene: six planets plus the global tilt.
///
/// Constructed once at startup with all angles zeroed, then mutated in place
/// by [`SceneState::advance`] every tick. The tick counter exists for
/// diagnostics and determinism checks; the animation itself only depends on
/// the angles.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    planets: [Planet; PLANET_COUNT],
    tilt_deg: f64,
    tick: u64,
}

impl SceneState {
    pub fn new() -> Self {
        let planets = bodies::planet_params().map(|p| Planet {
            orbit_radius: p.orbit_radius,
            angular_speed: p.angular_speed,
            color: p.color,
            angle: 0.0,
        });
        Self {
            planets,
            tilt_deg: 0.0,
            tick: 0,
        }
    }

    /// Ticks advanced since construction.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Rotation of the whole system about the X axis, degrees.
    pub fn tilt_deg(&self) -> f64 {
        self.tilt_deg
    }

    pub fn planets(&self) -> &[Planet; PLANET_COUNT] {
        &self.planets
    }

    /// Position of planet `index` on its orbit, before the system tilt.
    pub fn planet_position(&self, index: usize) -> DVec3 {
        self.planets[index].position()
    }

    /// Advance every angle by one tick.
    ///
    /// Wraparound is one-sided: an angle can transiently sit just past the
    /// limit between the increment and the correction, which is harmless
    /// since angles are only ever consumed through `cos`/`sin`.
    pub fn advance(&mut self) {
        for planet in &mut self.planets {
            planet.angle += planet.angular_speed;
            if planet.angle > TAU {
                planet.angle -= TAU;
            }
        }
        self.tilt_deg += bodies::TILT_SPEED;
        if self.tilt_deg > 360.0 {
            self.tilt_deg -= 360.0;
        }
        self.tick += 1;
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn starts_zeroed() {
        let scene = SceneState::new();
        assert_eq!(scene.tick(), 0);
        assert_eq!(scene.tilt_deg(), 0.0);
        for planet in scene.planets() {
            assert_eq!(planet.angle, 0.0);
        }
    }

    #[test]
    fn angles_stay_in_range() {
        let mut scene = SceneState::new();
        for _ in 0..100_000 {
            scene.advance();
            for planet in scene.planets() {
                assert!(
                    planet.angle >= 0.0 && planet.angle < TAU,
                    "angle out of range: {}",
                    planet.angle
                );
            }
            assert!(
                scene.tilt_deg() >= 0.0 && scene.tilt_deg() < 360.0,
                "tilt out of range: {}",
                scene.tilt_deg()
            );
        }
    }

    #[test]
    fn advance_is_deterministic() {
        let mut a = SceneState::new();
        let mut b = SceneState::new();
        for _ in 0..10_000 {
            a.advance();
            b.advance();
        }
        assert_eq!(a, b);
        assert_eq!(a.tick(), 10_000);
    }

    #[test]
    fn position_at_angle_zero_lies_on_x_axis() {
        let scene = SceneState::new();
        for (i, planet) in scene.planets().iter().enumerate() {
            let pos = scene.planet_position(i);
            assert!((pos.x - planet.orbit_radius).abs() < 1e-12);
            assert_eq!(pos.y, 0.0);
            assert!(pos.z.abs() < 1e-12);
        }
    }

    #[test]
    fn position_at_quarter_turn_lies_on_z_axis() {
        let planet = Planet {
            orbit_radius: 0.8,
            angular_speed: 0.005,
            color: [0.0, 0.0, 1.0],
            angle: FRAC_PI_2,
        };
        let pos = planet.position();
        assert!(pos.x.abs() < 1e-12);
        assert!((pos.z - 0.8).abs() < 1e-12);
    }

    #[test]
    fn innermost_planet_wraps_after_629_ticks() {
        // 629 × 0.01 ≈ 6.29, just past 2π, so exactly one wrap.
        let mut scene = SceneState::new();
        for _ in 0..629 {
            scene.advance();
        }
        let angle = scene.planets()[0].angle;
        let expected = 629.0 * 0.01 - TAU;
        assert!(
            (angle - expected).abs() < 1e-9,
            "angle {angle}, expected {expected}"
        );
    }

    #[test]
    fn tilt_wraps_exactly_once_around_3600_ticks() {
        // 3600 × 0.1 = 360.0 exactly in the reals, so the single wrap lands
        // on the 3600-tick boundary up to accumulated rounding.
        let mut scene = SceneState::new();
        let mut wraps = 0;
        let mut prev = scene.tilt_deg();
        for _ in 0..3600 {
            scene.advance();
            if scene.tilt_deg() < prev {
                wraps += 1;
            }
            prev = scene.tilt_deg();
        }
        assert!(wraps <= 1, "wrapped {wraps} times");
        let distance_from_full_turn = scene.tilt_deg().min(360.0 - scene.tilt_deg());
        assert!(
            distance_from_full_turn < 1e-6,
            "tilt {} not near a full turn",
            scene.tilt_deg()
        );

        // One more tick is past the boundary for certain.
        scene.advance();
        if scene.tilt_deg() < prev {
            wraps += 1;
        }
        assert_eq!(wraps, 1);
        assert!(scene.tilt_deg() < 0.2, "tilt {}", scene.tilt_deg());
    }
}
