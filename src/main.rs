use anyhow::{Context, anyhow};
use cupl::types::{InputState, Key, Plot};
use softbuffer::Surface;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};
const WIDTH: u32 = 600;
const HEIGHT: u32 = 600;
const TITLE: &str = "Messing with graphs.";
const TICK: Duration = Duration::from_micros(16_667);
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let mut app = App::new();
    log::info!("starting with keybinds {:?}", app.plot.keybinds);
    let event_loop = EventLoop::new().map_err(|e| anyhow!("failed to create event loop: {e}"))?;
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("event loop exited with an error: {e}"))?;
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
struct App {
    plot: Plot,
    input: InputState,
    surface_state: Option<Surface<Arc<Window>, Arc<Window>>>,
    next_tick: Instant,
    error: Option<anyhow::Error>,
}
impl App {
    fn new() -> Self {
        Self {
            plot: Plot::new(WIDTH, HEIGHT),
            input: InputState::default(),
            surface_state: None,
            next_tick: Instant::now(),
            error: None,
        }
    }
    fn fail(&mut self, el: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        el.exit();
    }
    fn create_surface(el: &ActiveEventLoop) -> anyhow::Result<Surface<Arc<Window>, Arc<Window>>> {
        let attributes = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(PhysicalSize::new(WIDTH, HEIGHT))
            .with_resizable(false);
        let window = el
            .create_window(attributes)
            .map_err(|e| anyhow!("{e}"))
            .context("failed to create window")?;
        let window = Arc::new(window);
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer context: {e}"))?;
        Surface::new(&context, window).map_err(|e| anyhow!("failed to create surface: {e}"))
    }
    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(state) = self.surface_state.as_mut() else {
            return Ok(());
        };
        let size = state.window().inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };
        state
            .resize(width, height)
            .map_err(|e| anyhow!("failed to resize surface: {e}"))?;
        let mut buffer = state
            .buffer_mut()
            .map_err(|e| anyhow!("failed to get surface buffer: {e}"))?;
        self.plot.update(width.get(), height.get(), &mut buffer);
        buffer
            .present()
            .map_err(|e| anyhow!("failed to present frame: {e}"))
    }
}
impl ApplicationHandler for App {
    fn resumed(&mut self, el: &ActiveEventLoop) {
        match Self::create_surface(el) {
            Ok(surface) => {
                log::debug!("window created");
                self.surface_state = Some(surface);
                self.next_tick = Instant::now();
            }
            Err(e) => self.fail(el, e),
        }
    }
    fn window_event(&mut self, el: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                el.exit()
            }
            WindowEvent::Focused(false) => self.input.reset(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                let Ok(key) = Key::try_from(physical_key) else {
                    return;
                };
                match state {
                    ElementState::Pressed => self.input.press(key),
                    ElementState::Released => self.input.release(key),
                }
                if self.plot.should_exit(&self.input) {
                    el.exit()
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(el, e)
                }
            }
            _ => {}
        }
    }
    fn about_to_wait(&mut self, el: &ActiveEventLoop) {
        let Some(state) = self.surface_state.as_ref() else {
            return;
        };
        let now = Instant::now();
        if now >= self.next_tick {
            self.plot.keybinds(&self.input);
            state.window().request_redraw();
            let next = self.next_tick + TICK;
            self.next_tick = if next < now { now + TICK } else { next };
        }
        el.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
    fn suspended(&mut self, _: &ActiveEventLoop) {
        log::debug!("suspended, dropping surface");
        self.surface_state = None;
    }
}
