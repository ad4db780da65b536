#![allow(dead_code)]

mod app;
mod camera;
mod components;
mod config;
mod constants;
mod error;
mod figure;
mod input;
mod mesh;
mod pose;
mod pose_apply;
mod renderer;
mod scene;
mod transition;
mod ui;

use camera::Camera;
use config::Config;
use constants::*;
use error::AppError;
use figure::Figure;
use pose::{PoseId, PoseTable};
use renderer::Renderer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use transition::{TickOutcome, TransitionDriver};

use glutin::prelude::*;
use glutin::surface::WindowSurface;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
    let config = load_config(&config_path).inspect_err(|e| tracing::error!("{e}"))?;

    let _profiler = start_profiler(&config);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.startup_error.take() {
        return Err(err.into());
    }
    Ok(())
}

fn load_config(path: &Path) -> error::Result<Config> {
    Ok(Config::load(path)?)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Serve puffin frame data when the config asks for it
fn start_profiler(config: &Config) -> Option<puffin_http::Server> {
    if !config.profiler {
        return None;
    }
    puffin::set_scopes_on(true);
    match puffin_http::Server::new(PROFILER_ADDR) {
        Ok(server) => {
            tracing::info!("Profiler listening on {}", PROFILER_ADDR);
            Some(server)
        }
        Err(e) => {
            tracing::warn!("Profiler disabled: {e}");
            None
        }
    }
}

struct App {
    config: Config,
    state: Option<AppState>,
    /// Set when startup aborts; reported once the event loop exits
    startup_error: Option<AppError>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,

    // Rendering
    camera: Camera,
    renderer: Renderer,

    // Figure and pose state
    figure: Figure,
    driver: TransitionDriver,

    // UI state
    ui_state: ui::PoseUiState,
    pose_bar: ui::PoseBarData,

    // Input state
    input: input::InputState,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
            startup_error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match AppState::new(event_loop, &self.config) {
            Ok(state) => self.state = Some(state),
            Err(e) => {
                tracing::error!("Startup failed: {e}");
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                state.camera.resize(size.width as f32, size.height as f32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        match event.state {
                            ElementState::Pressed => {
                                if key == KeyCode::Escape {
                                    event_loop.exit();
                                }
                                state.input.keys_pressed.insert(key);
                            }
                            ElementState::Released => {
                                state.input.keys_pressed.remove(&key);
                            }
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.input.mouse_pos = (position.x as f32, position.y as f32);
                let yaw = state.input.drag.motion(position.x as f32);
                if yaw != 0.0 {
                    state.figure.add_yaw(yaw);
                }
            }
            WindowEvent::MouseInput { state: btn_state, button: MouseButton::Left, .. } => {
                match btn_state {
                    // Drags that start on the pose bar belong to the UI
                    ElementState::Pressed if !egui_consumed.consumed => {
                        state.input.drag.press(state.input.mouse_pos.0);
                    }
                    ElementState::Pressed => {}
                    ElementState::Released => state.input.drag.release(),
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    /// Build everything the frame loop needs, or fail without partial setup
    fn new(event_loop: &ActiveEventLoop, config: &Config) -> error::Result<Self> {
        let mut figure = Figure::new()?;
        let driver = TransitionDriver::new(
            PoseTable::builtin()?,
            config.initial_pose,
            config.transition_secs(),
        );
        driver.apply_current(&mut figure);

        let mut ui_state = ui::PoseUiState::new();
        ui_state.select(driver.active_pose());
        let pose_bar = ui::PoseBarData::from_table(driver.table());

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop, config)?;

        let size = window.inner_size();
        let camera = Camera::new(size.width as f32, size.height as f32);
        let renderer = Renderer::new(gl.clone(), colors::WHITESMOKE)?;

        tracing::info!(
            "Ready: {} poses, starting at {}",
            driver.table().len(),
            driver.active_pose().name
        );

        Ok(Self {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            camera,
            renderer,
            figure,
            driver,
            ui_state,
            pose_bar,
            input: input::InputState::new(config.drag_sensitivity),
            last_frame_time: Instant::now(),
        })
    }

    fn update_and_render(&mut self) {
        puffin::GlobalProfiler::lock().new_frame();
        puffin::profile_function!();

        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;
        let dt = raw_dt.min(MAX_ANIMATION_DT);

        self.handle_input();

        let ui_actions = self.run_ui();
        self.process_ui_actions(ui_actions);

        if self.driver.tick(dt, &mut self.figure) == TickOutcome::Completed {
            tracing::info!("Pose {}", self.driver.active_pose().name);
        }

        let items = self.figure.scene.collect_drawables();
        self.renderer.render(&self.camera, &items);

        // Render egui on top
        self.egui_glow.paint(&self.window);

        if let Err(e) = self.gl_surface.swap_buffers(&self.gl_context) {
            tracing::warn!("Failed to swap buffers: {e}");
        }
    }

    fn run_ui(&mut self) -> ui::UiActions {
        let mut actions = ui::UiActions::default();

        let pose_bar = &self.pose_bar;
        let ui_state = &self.ui_state;

        self.egui_glow.run(&self.window, |ctx| {
            ui::draw_pose_caption(ctx, ui_state);
            ui::draw_pose_bar(ctx, pose_bar, ui_state, &mut actions);
        });

        actions
    }

    fn process_ui_actions(&mut self, actions: ui::UiActions) {
        if let Some(id) = actions.pose_clicked {
            self.select_pose(id);
        }
    }

    fn handle_input(&mut self) {
        let result = input::process_keyboard(&mut self.input);

        if result.toggle_fullscreen {
            use winit::window::Fullscreen;
            let fullscreen = if self.window.fullscreen().is_some() {
                None
            } else {
                Some(Fullscreen::Borderless(None))
            };
            self.window.set_fullscreen(fullscreen);
        }

        if let Some(id) = result.pose {
            self.select_pose(id);
        }
    }

    /// Start a transition and update the caption right away.
    /// Unknown ids change nothing.
    fn select_pose(&mut self, id: PoseId) {
        if let Some(pose) = self.driver.go_to_pose(id) {
            self.ui_state.select(pose);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::ConfigError;

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let config = load_config(Path::new("no/such/dir/ballerina.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unreadable_config_is_a_startup_error() {
        // A directory exists but cannot be read as a file
        let err = load_config(&std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Read { .. })));
    }
}
