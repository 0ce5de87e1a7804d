use std::env;
use std::fmt;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use log::info;
use pollster::block_on;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::keyboard::{Key, NamedKey as WinitNamedKey};
use winit::platform::run_on_demand::EventLoopExtRunOnDemand;
use winit::window::WindowBuilder;

use armlab::{app, handle_key, ArmPose, ArmRig, KeyCode, KeyLight, NamedKey, Renderer, ViewState};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse()?;
    let rig = ArmRig::default();
    let view = ViewState::default();
    let pose = ArmPose::new();

    if options.summary_only {
        app::print_summary(&rig, &view, &pose);
        return Ok(());
    }

    match run_interactive(rig, view, pose) {
        Ok(()) => Ok(()),
        Err(err) => {
            if err.downcast_ref::<WindowInitError>().is_some() {
                eprintln!(
                    "{err}. Falling back to --summary-only mode (set DISPLAY or install X11 libs to enable rendering)."
                );
                app::print_summary(&rig, &view, &pose);
                Ok(())
            } else {
                Err(err)
            }
        }
    }
}

fn run_interactive(rig: ArmRig, view: ViewState, pose: ArmPose) -> Result<()> {
    let mut event_loop =
        EventLoop::new().map_err(|err| WindowInitError::from_error("event loop", err))?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Robotic Arm")
            .with_inner_size(LogicalSize::new(1280.0, 720.0))
            .build(&event_loop)
            .map_err(|err| WindowInitError::from_error("window", err))?,
    );

    let renderer = block_on(Renderer::new(Arc::clone(&window), KeyLight::default()))?;

    // The window manager may not have honored the requested size.
    let size = window.inner_size();
    let mut view = view;
    view.set_viewport(size.width, size.height);

    println!("{}", app::controls_help());

    let mut app = AppState {
        renderer,
        rig,
        view,
        pose,
        last_error: None,
    };

    event_loop.run_on_demand(|event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);
        if let Err(err) = app.process_event(&event, elwt) {
            app.last_error = Some(err);
            elwt.exit();
        }
    })?;

    app.shutdown();

    if let Some(err) = app.last_error {
        return Err(err);
    }

    Ok(())
}

struct AppState {
    renderer: Renderer,
    rig: ArmRig,
    view: ViewState,
    pose: ArmPose,
    last_error: Option<anyhow::Error>,
}

impl AppState {
    fn process_event(
        &mut self,
        event: &Event<()>,
        elwt: &EventLoopWindowTarget<()>,
    ) -> Result<()> {
        match event {
            Event::WindowEvent { event, window_id } if *window_id == self.renderer.window_id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::Resized(size) => {
                        self.renderer.resize(*size);
                        self.view.set_viewport(size.width, size.height);
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        self.handle_keyboard(event, elwt);
                    }
                    WindowEvent::RedrawRequested => {
                        self.redraw()?;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                self.renderer.window().request_redraw();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_keyboard(&mut self, event: &KeyEvent, elwt: &EventLoopWindowTarget<()>) {
        if event.state != ElementState::Pressed {
            return;
        }
        if event.logical_key == Key::Named(WinitNamedKey::Escape) {
            elwt.exit();
            return;
        }
        let Some(key) = map_key(&event.logical_key) else {
            return;
        };
        if handle_key(key, &mut self.view, &mut self.pose) {
            self.renderer.window().request_redraw();
        }
    }

    fn redraw(&mut self) -> Result<()> {
        self.renderer.update_globals(&self.view);
        let commands = self.rig.draw(&self.pose);
        if let Err(err) = self.renderer.render(&commands) {
            match err {
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                    let size = self.renderer.window().inner_size();
                    self.renderer.resize(size);
                }
                wgpu::SurfaceError::OutOfMemory => {
                    return Err(anyhow!("GPU is out of memory"));
                }
                wgpu::SurfaceError::Timeout => {
                    info!("Surface timeout; retrying next frame");
                }
            }
        }
        Ok(())
    }

    fn shutdown(&self) {
        app::print_summary(&self.rig, &self.view, &self.pose);
    }
}

#[derive(Debug)]
struct WindowInitError {
    message: String,
}

impl WindowInitError {
    fn from_error(stage: &str, err: impl fmt::Display) -> Self {
        Self {
            message: format!("failed to initialize {stage}: {err}"),
        }
    }
}

impl fmt::Display for WindowInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for WindowInitError {}

fn map_key(key: &Key) -> Option<KeyCode> {
    Some(match key {
        Key::Named(WinitNamedKey::ArrowUp) => KeyCode::Named(NamedKey::Up),
        Key::Named(WinitNamedKey::ArrowDown) => KeyCode::Named(NamedKey::Down),
        Key::Named(WinitNamedKey::F1) => KeyCode::Function(1),
        Key::Named(WinitNamedKey::F2) => KeyCode::Function(2),
        Key::Named(WinitNamedKey::F3) => KeyCode::Function(3),
        Key::Named(WinitNamedKey::F4) => KeyCode::Function(4),
        Key::Named(WinitNamedKey::F5) => KeyCode::Function(5),
        Key::Named(WinitNamedKey::F6) => KeyCode::Function(6),
        Key::Named(WinitNamedKey::F7) => KeyCode::Function(7),
        Key::Named(WinitNamedKey::F8) => KeyCode::Function(8),
        Key::Named(WinitNamedKey::F9) => KeyCode::Function(9),
        Key::Named(WinitNamedKey::F10) => KeyCode::Function(10),
        Key::Named(WinitNamedKey::F11) => KeyCode::Function(11),
        Key::Named(WinitNamedKey::F12) => KeyCode::Function(12),
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Character(ch),
                _ => return None,
            }
        }
        _ => return None,
    })
}

struct CliOptions {
    summary_only: bool,
}

impl CliOptions {
    fn parse() -> Result<Self> {
        let mut summary_only = false;
        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--summary-only" => summary_only = true,
                other => {
                    return Err(anyhow!(
                        "Unknown argument: {other}. Usage: armlab [--summary-only]"
                    ));
                }
            }
        }
        Ok(Self { summary_only })
    }
}
