//! Body tables: radii, orbit parameters, and colors for the Sun and the six
//! toy planets. All values are compile-time constants; the planets are ordered
//! innermost to outermost.

/// Number of orbiting bodies.
pub const PLANET_COUNT: usize = 6;

/// Visual radius of the central body.
pub const SUN_RADIUS: f32 = 0.2;
/// Visual radius shared by all planets.
pub const PLANET_RADIUS: f32 = 0.05;

pub const SUN_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
/// Orbit paths are drawn white.
pub const ORBIT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Rotation of the whole system about the X axis, degrees per tick.
pub const TILT_SPEED: f64 = 0.1;

/// Fixed per-planet configuration. The current angle lives in
/// [`crate::state::Planet`]; this is only the immutable part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetParams {
    /// Distance from the Sun at which the circular orbit lies.
    pub orbit_radius: f64,
    /// Radians advanced per tick.
    pub angular_speed: f64,
    pub color: [f32; 3],
}

/// Per-planet parameters, innermost first. Orbit radii are strictly
/// increasing so the paths never overlap on screen.
pub fn planet_params() -> [PlanetParams; PLANET_COUNT] {
    [
        PlanetParams { orbit_radius: 0.4, angular_speed: 0.010, color: [1.0, 0.0, 0.0] }, // red
        PlanetParams { orbit_radius: 0.6, angular_speed: 0.007, color: [0.0, 1.0, 0.0] }, // green
        PlanetParams { orbit_radius: 0.8, angular_speed: 0.005, color: [0.0, 0.0, 1.0] }, // blue
        PlanetParams { orbit_radius: 1.0, angular_speed: 0.004, color: [1.0, 1.0, 0.0] }, // yellow
        PlanetParams { orbit_radius: 1.2, angular_speed: 0.003, color: [0.5, 0.5, 1.0] }, // light blue
        PlanetParams { orbit_radius: 1.4, angular_speed: 0.002, color: [0.5, 0.2, 0.8] }, // purple
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape() {
        assert_eq!(planet_params().len(), PLANET_COUNT);
    }

    #[test]
    fn orbit_radii_strictly_increasing() {
        let params = planet_params();
        for pair in params.windows(2) {
            assert!(
                pair[0].orbit_radius < pair[1].orbit_radius,
                "orbit radii out of order: {} then {}",
                pair[0].orbit_radius,
                pair[1].orbit_radius
            );
        }
    }

    #[test]
    fn speeds_positive_and_below_full_turn() {
        for p in &planet_params() {
            assert!(p.angular_speed > 0.0);
            assert!(p.angular_speed < std::f64::consts::TAU);
        }
    }
}
