//! Camera placement for viewing the blob.

/// Fixed perspective camera looking at the blob
#[derive(Debug, Clone)]
pub struct CameraRig {
    /// Camera position (world units)
    pub eye: [f32; 3],

    /// Look-at target (world units)
    pub target: [f32; 3],

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0], // Unit blob fills about a third of the view
            target: [0.0, 0.0, 0.0],
            fov_degrees: 50.0,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}
