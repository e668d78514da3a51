//! Rendering and recording configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Icosphere subdivision level (each face split into (detail + 1)^2 triangles)
    pub detail: u32,

    /// Radius of the undisplaced blob (world units)
    pub radius: f32,

    /// Direction towards the key light (world space, need not be normalized)
    pub light_position: [f32; 3],

    /// Key light intensity multiplier
    pub light_intensity: f32,

    /// Exposure applied before tone mapping
    pub exposure: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            detail: 8,
            radius: 1.0,
            light_position: [5.0, 5.0, 5.0],
            light_intensity: 1.5,
            exposure: 1.2,
        }
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: String,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: "recording".to_string(),
            fps: 60,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> String {
        format!("{}/frames", self.output_dir)
    }

    /// Path of a single captured frame
    pub fn frame_path(&self, frame_num: usize) -> String {
        format!("{}/frame_{:05}.png", self.frames_dir(), frame_num)
    }

    /// Animation time of a captured frame (fixed timestep, independent of render speed)
    pub fn frame_time(&self, frame_num: usize) -> f64 {
        frame_num as f64 / self.fps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_frame_count_rounds_up() {
        let config = RecordingConfig::new(1.01);
        assert_eq!(config.total_frames(), 61);
    }

    #[test]
    fn test_recording_paths() {
        let config = RecordingConfig::new(2.0);
        assert_eq!(config.frames_dir(), "recording/frames");
        assert_eq!(config.frame_path(7), "recording/frames/frame_00007.png");
        assert_eq!(config.frame_time(30), 0.5);
    }
}
