use glam::{Mat4, Vec3};
use orrery_scene::{bodies, SceneState};

/// Background color for every frame.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// One draw command. Backends consume these in order.
///
/// Spheres and rings reference unit meshes; `model` carries the full local
/// transform (system tilt, orbit translation, radius scale) so no transform
/// state leaks from one command to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    /// Clear the color and depth targets.
    Clear { color: [f32; 4] },
    /// Unit circle in the XZ plane, scaled to an orbit radius.
    OrbitRing { model: Mat4, color: [f32; 3] },
    /// Unit wireframe sphere, scaled and positioned.
    Sphere { model: Mat4, color: [f32; 3] },
}

/// Compose the frame for the given scene.
///
/// The sequence is fixed: one clear, the Sun at the origin, then for each
/// planet in table order its orbit ring followed by the planet sphere at its
/// current angle. The global tilt rotates everything together, so it is
/// baked into every model matrix.
pub fn build_frame(scene: &SceneState) -> Vec<DrawCmd> {
    let tilt = Mat4::from_rotation_x((scene.tilt_deg() as f32).to_radians());

    let mut cmds = Vec::with_capacity(2 + 2 * bodies::PLANET_COUNT);
    cmds.push(DrawCmd::Clear { color: CLEAR_COLOR });

    cmds.push(DrawCmd::Sphere {
        model: tilt * Mat4::from_scale(Vec3::splat(bodies::SUN_RADIUS)),
        color: bodies::SUN_COLOR,
    });

    for (index, planet) in scene.planets().iter().enumerate() {
        cmds.push(DrawCmd::OrbitRing {
            model: tilt * Mat4::from_scale(Vec3::splat(planet.orbit_radius as f32)),
            color: bodies::ORBIT_COLOR,
        });

        let position = scene.planet_position(index).as_vec3();
        cmds.push(DrawCmd::Sphere {
            model: tilt
                * Mat4::from_translation(position)
                * Mat4::from_scale(Vec3::splat(bodies::PLANET_RADIUS)),
            color: planet.color,
        });
    }

    cmds
}
