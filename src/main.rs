use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use glam::Vec2;
use log::{info, trace};
use pollster::block_on;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use teapot_demo::input::{cursor_moved, primary_button};
use teapot_demo::{
    apply_key, camera_params, checkerboard, select_from_menu, ContextMenu, DemoKey, Directive,
    FrameTimer, LightParams, Renderer, SceneState,
};

fn main() -> ExitCode {
    env_logger::init();
    let options = match CliOptions::parse() {
        Ok(CliParse::Run(options)) => options,
        Ok(CliParse::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

const USAGE: &str = "Usage: teapot-demo [--width N] [--height N] [--help]

Controls:
  w/a/s/d       pan the camera center
  u/h/j/k/y/i   move the teapot
  3..8          rotate the teapot about x/y/z
  + / -         narrow / widen the field of view
  1             look at the cube or follow the teapot
  l / p / t     toggle lighting / polygon fill / texturing
  left drag     zoom in and out
  right click   context menu
  Esc           exit";

fn run(options: CliOptions) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to initialize event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(options);
    event_loop.run_app(&mut app).context("event loop failed")?;

    if let Some(err) = app.failure.take() {
        return Err(err);
    }
    Ok(())
}

struct CliOptions {
    width: u32,
    height: u32,
}

enum CliParse {
    Run(CliOptions),
    Help,
}

impl CliOptions {
    fn parse() -> Result<CliParse> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from(args: impl Iterator<Item = String>) -> Result<CliParse> {
        let mut options = CliOptions {
            width: 600,
            height: 600,
        };
        let mut args = args;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(CliParse::Help),
                "--width" => options.width = parse_dimension("--width", args.next())?,
                "--height" => options.height = parse_dimension("--height", args.next())?,
                other => {
                    return Err(anyhow!(
                        "Unknown argument: {other}. Expected --width, --height, or --help"
                    ));
                }
            }
        }
        Ok(CliParse::Run(options))
    }
}

fn parse_dimension(flag: &str, value: Option<String>) -> Result<u32> {
    let value = value.ok_or_else(|| anyhow!("{flag} requires a value"))?;
    let parsed: u32 = value
        .parse()
        .map_err(|_| anyhow!("{flag} expects a positive integer, got {value:?}"))?;
    if parsed == 0 {
        return Err(anyhow!("{flag} must be nonzero"));
    }
    Ok(parsed)
}

/// Startup failures the shell treats as fatal.
#[derive(Debug, Error)]
enum InitError {
    #[error("failed to create window: {0}")]
    Window(winit::error::OsError),
    #[error("failed to initialize renderer: {0}")]
    Renderer(anyhow::Error),
}

struct App {
    options: CliOptions,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: SceneState,
    menu: ContextMenu,
    light: LightParams,
    frame_timer: FrameTimer,
    cursor: Vec2,
    failure: Option<anyhow::Error>,
}

impl App {
    fn new(options: CliOptions) -> Self {
        Self {
            options,
            window: None,
            renderer: None,
            scene: SceneState::default(),
            menu: ContextMenu::new(),
            light: LightParams::default(),
            frame_timer: FrameTimer::new(),
            cursor: Vec2::ZERO,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.failure = Some(err);
        event_loop.exit();
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let key = match &event.logical_key {
            Key::Named(NamedKey::Escape) => DemoKey::Escape,
            Key::Character(text) => match text.chars().next() {
                Some(ch) => DemoKey::Char(ch),
                None => return,
            },
            _ => return,
        };
        match apply_key(&mut self.scene, key) {
            Directive::Exit => event_loop.exit(),
            // The projection is rebuilt from the scene every frame, so a
            // fov change needs nothing beyond a fresh frame.
            Directive::Redraw | Directive::Reproject => self.request_redraw(),
            Directive::Ignored => {}
        }
    }

    fn handle_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        match button {
            MouseButton::Left => {
                primary_button(&mut self.scene, state == ElementState::Pressed, self.cursor.y);
            }
            MouseButton::Right => {
                if state == ElementState::Pressed {
                    self.menu.open_at(self.cursor);
                    self.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let camera = camera_params(&self.scene, renderer.aspect());
        renderer.update_globals(&camera, &self.light, &self.scene);
        let selected = match renderer.render(&self.scene, &mut self.menu) {
            Ok(selected) => selected,
            Err(err) => {
                match err {
                    wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                        let size = renderer.window().inner_size();
                        renderer.resize(size);
                    }
                    wgpu::SurfaceError::OutOfMemory => {
                        self.fail(event_loop, anyhow!("GPU is out of memory"));
                    }
                    wgpu::SurfaceError::Timeout => {
                        info!("surface timeout; retrying next frame");
                    }
                    wgpu::SurfaceError::Other => {
                        self.fail(event_loop, anyhow!("surface error"));
                    }
                }
                return;
            }
        };
        if let Some(command) = selected {
            if select_from_menu(&mut self.scene, command) == Directive::Exit {
                event_loop.exit();
            } else {
                self.request_redraw();
            }
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title("Cube & teapot")
            .with_inner_size(LogicalSize::new(
                self.options.width as f64,
                self.options.height as f64,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                return self.fail(event_loop, InitError::Window(err).into());
            }
        };

        let texture = checkerboard();
        match block_on(Renderer::new(Arc::clone(&window), &texture)) {
            Ok(renderer) => {
                info!(
                    "renderer ready; window {}x{}",
                    window.inner_size().width,
                    window.inner_size().height
                );
                self.renderer = Some(renderer);
                self.window = Some(window);
            }
            Err(err) => self.fail(event_loop, InitError::Renderer(err).into()),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if renderer.window_id() != window_id {
            return;
        }
        // The menu overlay gets first refusal on pointer events.
        if renderer.handle_event(&event) {
            self.request_redraw();
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                renderer.resize(size);
                self.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = renderer.window().inner_size();
                renderer.resize(size);
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_button(state, button)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                if cursor_moved(&mut self.scene, self.cursor.y) {
                    self.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // One redraw per idle tick; the elapsed time is measured but
        // feeds no animation yet.
        let dt = self.frame_timer.tick();
        trace!("idle tick, dt = {dt:.4}s");
        self.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliParse> {
        CliOptions::parse_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn default_window_is_600_square() {
        let CliParse::Run(options) = parse(&[]).unwrap() else {
            panic!("expected run options");
        };
        assert_eq!((options.width, options.height), (600, 600));
    }

    #[test]
    fn dimensions_are_parsed() {
        let CliParse::Run(options) = parse(&["--width", "800", "--height", "480"]).unwrap() else {
            panic!("expected run options");
        };
        assert_eq!((options.width, options.height), (800, 480));
    }

    #[test]
    fn help_short_circuits() {
        assert!(matches!(parse(&["--help"]).unwrap(), CliParse::Help));
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse(&["--width"]).is_err());
        assert!(parse(&["--width", "abc"]).is_err());
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--wat"]).is_err());
    }
}
