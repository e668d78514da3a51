//! Fixed perspective camera framing the blob.

use glam::{Mat4, Vec3};

use crate::params::CameraRig;

/// Camera system producing view, projection and model transforms
pub struct CameraSystem {
    rig: CameraRig,
}

impl CameraSystem {
    pub fn new(rig: CameraRig) -> Self {
        Self { rig }
    }

    /// Camera position in world space
    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.rig.eye)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Arguments
    /// * `aspect_ratio` - Surface width divided by height
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(&self, aspect_ratio: f32) -> (Mat4, Vec3) {
        let eye = self.eye();
        let target = Vec3::from_array(self.rig.target);

        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            self.rig.fov_degrees.to_radians(),
            aspect_ratio.max(f32::EPSILON),
            self.rig.near_plane,
            self.rig.far_plane,
        );

        (proj * view, eye)
    }

    /// Model matrix spinning the blob about its vertical axis
    pub fn model_matrix(angle_rad: f32) -> Mat4 {
        Mat4::from_rotation_y(angle_rad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = CameraSystem::new(CameraRig::default());
        let (view_proj, eye) = camera.create_view_proj_matrix(16.0 / 9.0);

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert_eq!(eye, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = CameraSystem::new(CameraRig::default());
        let (view_proj, _) = camera.create_view_proj_matrix(1.5);

        let clip = view_proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!((0.0..=1.0).contains(&ndc.z), "depth {} outside wgpu range", ndc.z);
    }

    #[test]
    fn test_unit_blob_fits_in_view() {
        let camera = CameraSystem::new(CameraRig::default());
        let (view_proj, _) = camera.create_view_proj_matrix(16.0 / 9.0);

        // Even fully displaced (radius ~2) the blob stays inside the frustum vertically
        let clip = view_proj * Vec4::new(0.0, 2.0, 0.0, 1.0);
        assert!((clip.y / clip.w).abs() < 1.0);
    }

    #[test]
    fn test_model_matrix_spins_about_y() {
        let m = CameraSystem::model_matrix(std::f32::consts::FRAC_PI_2);
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);

        let up = m.transform_point3(Vec3::Y);
        assert!((up - Vec3::Y).length() < 1e-6);
    }
}
