//! Command-line argument parsing.

use anyhow::{Context, Result};
use clap::Parser;

use crate::clock::SECONDS_PER_DAY;
use crate::params::{BlobShape, RecordingConfig, RenderConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "timeblob")]
#[command(about = "A daily procedural blob that grows wilder as the day goes on", long_about = None)]
pub struct Args {
    /// Seed string to use instead of today's date (YYYY-MM-DD)
    #[arg(long, value_name = "STRING")]
    pub seed: Option<String>,

    /// Pin the clock to this many seconds after UTC midnight
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u32).range(0..SECONDS_PER_DAY as i64))]
    pub time: Option<u32>,

    /// Enable interactive test controls (N: new blob, Left/Right: scrub time, R: live time)
    #[arg(long)]
    pub test_mode: bool,

    /// Base noise frequency on the unit sphere
    #[arg(long, value_name = "SCALE", default_value_t = 1.0, value_parser = parse_finite)]
    pub noise_scale: f64,

    /// Displacement amplitude reached at the end of the day
    #[arg(long, value_name = "AMPLITUDE", default_value_t = 1.0, value_parser = parse_finite)]
    pub max_amplitude: f64,

    /// Blob spin about its vertical axis (radians per second)
    #[arg(long, value_name = "RAD_PER_S", default_value_t = 0.0, value_parser = parse_finite)]
    pub rotation_speed: f64,

    /// Icosphere subdivision level
    #[arg(long, value_name = "LEVEL", default_value_t = 8)]
    pub detail: u32,

    /// Record frames to PNG (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,
}

/// Parse a float, refusing NaN and infinities
fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("expected a finite number, got {}", s))
    }
}

impl Args {
    /// Shape parameters with CLI overrides applied
    pub fn shape(&self) -> BlobShape {
        BlobShape {
            noise_scale: self.noise_scale,
            max_amplitude: self.max_amplitude,
            rotation_speed: self.rotation_speed,
            ..BlobShape::default()
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            detail: self.detail,
            ..RenderConfig::default()
        }
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Result<Option<RecordingConfig>> {
        let Some(duration) = self.record else {
            return Ok(None);
        };
        let config = RecordingConfig::new(duration);

        std::fs::create_dir_all(config.frames_dir())
            .with_context(|| format!("creating {}", config.frames_dir()))?;

        Ok(Some(config))
    }
}
