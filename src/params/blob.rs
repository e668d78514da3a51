//! Blob shape parameters and host-side material defaults.

/// Shape parameters consumed by the displacement engine
#[derive(Debug, Clone, PartialEq)]
pub struct BlobShape {
    /// Base spatial frequency of the noise on the unit sphere
    pub noise_scale: f64,

    /// Displacement amplitude at midnight (day progress 0)
    pub base_amplitude: f64,

    /// Displacement amplitude approached at the end of the day (day progress 1)
    pub max_amplitude: f64,

    /// Spin of the blob about its vertical axis (radians per second)
    pub rotation_speed: f64,
}

impl Default for BlobShape {
    fn default() -> Self {
        Self {
            noise_scale: 1.0,
            base_amplitude: 0.0,
            max_amplitude: 1.0,
            rotation_speed: 0.0,
        }
    }
}

impl BlobShape {
    /// Amplitude at day progress `t`: linear ramp from base to max.
    pub fn amplitude_at(&self, t: f64) -> f64 {
        self.base_amplitude + (self.max_amplitude - self.base_amplitude) * t
    }

    /// Noise frequency at day progress `t`: grows by half over the day.
    pub fn frequency_at(&self, t: f64) -> f64 {
        self.noise_scale * (1.0 + t * 0.5)
    }
}

/// Surface shading parameters for the rendering host.
///
/// The procedural core never reads these; they only feed the fragment shader.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialParams {
    /// Metallic tint of highlights (0 = dielectric, 1 = metal)
    pub metalness: f32,

    /// Surface roughness (0 = mirror, 1 = fully diffuse)
    pub roughness: f32,

    /// Strength of the glossy clearcoat layer
    pub clearcoat: f32,

    /// Weight of the environment gradient reflection
    pub env_intensity: f32,

    /// Strength of the specular lobe
    pub specular_intensity: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            metalness: 0.21,
            roughness: 0.2,
            clearcoat: 0.9,
            env_intensity: 1.2,
            specular_intensity: 0.97,
        }
    }
}

impl MaterialParams {
    /// Blinn-Phong exponent approximating `roughness`
    pub fn shininess(&self) -> f32 {
        let r = self.roughness.clamp(0.02, 1.0);
        2.0 / (r * r) - 2.0
    }
}
