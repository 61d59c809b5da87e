use glam::Mat4;
use orrery_render::RenderView;

/// Fixed look-at camera.
///
/// Wraps the agnostic [`RenderView`] with the aspect ratio of the surface
/// and produces the matrices for the GPU uniform. Unlike the view itself,
/// the aspect follows the window.
pub struct SceneCamera {
    pub view: RenderView,
    pub aspect: f32,
}

impl SceneCamera {
    pub fn new(view: RenderView, aspect: f32) -> Self {
        Self { view, aspect }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.view.eye, self.view.target, self.view.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.view.fov_degrees.to_radians(),
            self.aspect,
            self.view.near,
            self.view.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn matrices_are_finite() {
        let cam = SceneCamera::new(RenderView::default(), 800.0 / 600.0);
        let vp = cam.view_projection();
        for col in 0..4 {
            assert!(vp.col(col).is_finite());
        }
    }

    #[test]
    fn origin_projects_in_front_of_the_camera() {
        let cam = SceneCamera::new(RenderView::default(), 800.0 / 600.0);
        let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
        // Origin is 5 units down the view axis, between near and far.
        assert!(clip.w > 0.0);
        let ndc_z = clip.z / clip.w;
        assert!(ndc_z > 0.0 && ndc_z < 1.0, "ndc z = {ndc_z}");
    }

    #[test]
    fn aspect_follows_the_window() {
        let mut cam = SceneCamera::new(RenderView::default(), 1.0);
        cam.set_aspect(800, 600);
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
        cam.set_aspect(100, 0);
        assert_eq!(cam.aspect, 100.0);
    }
}
