//! timeblob - a procedural blob that belongs to one calendar day
//!
//! The date picks its colors and noise; the time of day decides how wild
//! the surface gets.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use timeblob::blob::{test_seed_key, BaseGeometry, BlobSystem};
use timeblob::camera::CameraSystem;
use timeblob::cli::Args;
use timeblob::clock::{format_time, today_key, DayClock, RolloverTracker};
use timeblob::params::{CameraRig, MaterialParams, RecordingConfig, RenderConfig};
use timeblob::rendering::{BlobUniforms, RenderSystem};

/// Time override step for the arrow keys (seconds)
const SCRUB_STEP_SECS: i64 = 15 * 60;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation systems
    blob: BlobSystem,
    camera: CameraSystem,
    clock: DayClock,
    rollover: RolloverTracker,

    // Configuration
    render_config: RenderConfig,
    material: MaterialParams,
    recording_config: Option<RecordingConfig>,
    test_mode: bool,
    /// Seed given on the command line; disables day rollover
    fixed_seed: bool,

    test_counter: u32,
    frame_num: usize,
    /// Blob generation whose palette the renderer currently shows
    palette_generation: Option<u64>,
}

impl App {
    fn new(args: &Args) -> Result<Self> {
        let render_config = args.render_config();
        let recording_config = args.create_recording_config()?;

        let mut clock = DayClock::new();
        if let Some(seconds) = args.time {
            clock.set_override(Some(seconds))?;
            log::info!("Time pinned to {} UTC", format_time(seconds));
        }

        let today = today_key();
        let seed = args.seed.clone().unwrap_or_else(|| today.clone());

        let base = BaseGeometry::icosphere(render_config.radius, render_config.detail);
        let blob = BlobSystem::new(base, &seed, args.shape());

        Ok(Self {
            window: None,
            render_system: None,
            blob,
            camera: CameraSystem::new(CameraRig::default()),
            clock,
            rollover: RolloverTracker::new(today),
            render_config,
            material: MaterialParams::default(),
            recording_config,
            test_mode: args.test_mode,
            fixed_seed: args.seed.is_some(),
            test_counter: 0,
            frame_num: 0,
            palette_generation: None,
        })
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            self.blob.base().vertex_count(),
            self.recording_config.as_ref(),
        ))?;

        if self.test_mode {
            log::info!("Test mode: N = new blob, Left/Right = scrub 15 min, R = live time");
        }
        if let Some(config) = &self.recording_config {
            log::info!(
                "Recording {} frames to {}",
                config.total_frames(),
                config.frames_dir()
            );
        }

        self.window = Some(window);
        self.render_system = Some(render_system);
        Ok(())
    }

    fn title(&self) -> String {
        match self.clock.time_override() {
            Some(seconds) => format!(
                "timeblob | {} | {} UTC",
                self.blob.state().seed_string,
                format_time(seconds)
            ),
            None => format!("timeblob | {}", self.blob.state().seed_string),
        }
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            window.set_title(&self.title());
        }
    }

    fn reseed(&mut self, seed: &str) {
        self.blob.reseed(seed);
        self.refresh_title();
    }

    /// Interactive controls, only active in test mode
    fn handle_test_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::KeyN => {
                self.test_counter += 1;
                let seed = test_seed_key(self.rollover.current(), self.test_counter);
                self.reseed(&seed);
            }
            KeyCode::ArrowLeft | KeyCode::ArrowRight => {
                let delta = if key == KeyCode::ArrowLeft {
                    -SCRUB_STEP_SECS
                } else {
                    SCRUB_STEP_SECS
                };
                let seconds = self.clock.scrub(delta);
                log::info!("Time override {} UTC", format_time(seconds));
                self.refresh_title();
            }
            KeyCode::KeyR => {
                self.clock.clear_override();
                log::info!("Following the wall clock");
                self.refresh_title();
            }
            _ => {}
        }
    }

    /// Rebuild the blob once the UTC calendar day changes
    fn check_rollover(&mut self) {
        if self.test_mode || self.fixed_seed {
            return;
        }
        let today = today_key();
        if self.rollover.observe(&today) {
            log::info!("New day {}, growing a new blob", today);
            self.reseed(&today);
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_window(event_loop) {
            log::error!("Startup failed: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                } else if self.test_mode && !repeat {
                    self.handle_test_key(code);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Advance the blob and draw a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        self.check_rollover();

        // Recording runs on a fixed timestep so captures are independent of render speed
        let (elapsed, capture_path) = match &self.recording_config {
            Some(config) => {
                if self.frame_num >= config.total_frames() {
                    log::info!("Recording complete: {} frames", self.frame_num);
                    event_loop.exit();
                    return;
                }
                (
                    config.frame_time(self.frame_num),
                    Some(PathBuf::from(config.frame_path(self.frame_num))),
                )
            }
            None => (self.clock.elapsed_time(), None),
        };
        let t = self.clock.day_progress();

        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        let generation = self.blob.generation();
        if self.palette_generation != Some(generation) {
            render_system.set_palette(&self.blob.state().palette);
            self.palette_generation = Some(generation);
        }

        let vertices = match self.blob.update(t, elapsed) {
            Ok(vertices) => vertices,
            Err(e) => {
                log::warn!("Skipping frame: {}", e);
                return;
            }
        };
        render_system.update_vertices(vertices);

        let (view_proj, eye) = self
            .camera
            .create_view_proj_matrix(render_system.aspect_ratio());
        let model = CameraSystem::model_matrix(self.blob.rotation_angle(elapsed));
        let uniforms = BlobUniforms::new(
            view_proj,
            model,
            eye,
            &self.render_config,
            &self.material,
            self.blob.state().environment_gradient(),
        );
        render_system.update_uniforms(&uniforms);

        match render_system.render(capture_path.as_deref()) {
            Ok(()) => self.frame_num += 1,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    render_system.resize(size.width, size.height);
                }
            }
            Err(e) => log::error!("Render error: {:?}", e),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("timeblob starting");

    let mut app = App::new(&args)?;
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
