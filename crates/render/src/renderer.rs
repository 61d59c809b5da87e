use glam::Vec3;
use orrery_scene::SceneState;

use crate::frame::{build_frame, DrawCmd};

/// Camera/view configuration for rendering.
///
/// The toy scene uses one fixed camera; these defaults are the whole story.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up direction.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 45.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads scene state and a view configuration and produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene state and view.
    fn render(&self, scene: &SceneState, view: &RenderView) -> Self::Output;
}

/// Text renderer for headless use.
///
/// Produces a human-readable listing of the frame's draw commands, derived
/// entirely from the command stream the GPU backend would consume. Useful
/// for CLI output, logging, and testing the frame contract.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &SceneState, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (tick={}, tilt={:.2}°) ===\n",
            scene.tick(),
            scene.tilt_deg()
        ));
        out.push_str(&format!(
            "camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}°\n",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z,
            view.fov_degrees
        ));

        for cmd in build_frame(scene) {
            match cmd {
                DrawCmd::Clear { color } => {
                    out.push_str(&format!(
                        "clear  color=({:.2}, {:.2}, {:.2})\n",
                        color[0], color[1], color[2]
                    ));
                }
                DrawCmd::OrbitRing { model, color } => {
                    // Uniform scale, so any basis column's length is the radius.
                    let radius = model.x_axis.truncate().length();
                    out.push_str(&format!(
                        "orbit  r={:.3} color=({:.2}, {:.2}, {:.2})\n",
                        radius, color[0], color[1], color[2]
                    ));
                }
                DrawCmd::Sphere { model, color } => {
                    let radius = model.x_axis.truncate().length();
                    let pos = model.w_axis.truncate();
                    out.push_str(&format!(
                        "sphere r={:.3} pos=({:.3}, {:.3}, {:.3}) color=({:.2}, {:.2}, {:.2})\n",
                        radius, pos.x, pos.y, pos.z, color[0], color[1], color[2]
                    ));
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_scene::bodies::PLANET_COUNT;

    #[test]
    fn render_view_default_matches_the_fixed_camera() {
        let view = RenderView::default();
        assert_eq!(view.eye, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(view.target, Vec3::ZERO);
        assert_eq!(view.up, Vec3::Y);
        assert_eq!(view.fov_degrees, 45.0);
        assert_eq!(view.near, 0.1);
        assert_eq!(view.far, 10.0);
    }

    #[test]
    fn debug_renderer_lists_every_draw() {
        let scene = SceneState::new();
        let output = DebugTextRenderer::new().render(&scene, &RenderView::default());

        assert!(output.contains("tick=0"));
        assert_eq!(output.matches("clear").count(), 1);
        assert_eq!(output.matches("orbit").count(), PLANET_COUNT);
        assert_eq!(output.matches("\nsphere").count(), 1 + PLANET_COUNT);
    }

    #[test]
    fn debug_renderer_reports_orbit_radii() {
        let scene = SceneState::new();
        let output = DebugTextRenderer::new().render(&scene, &RenderView::default());
        assert!(output.contains("r=0.400"));
        assert!(output.contains("r=1.400"));
    }
}
