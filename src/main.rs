mod config;
mod game_state;
mod graphics;
mod grid;
mod grid_renderer;
mod input;
mod input_mapping;
mod screen;

use std::path::Path;
use std::time::{Duration, Instant};

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::{AppConfig, CONFIG_PATH};
use crate::game_state::GameState;
use crate::graphics::GraphicsRenderer;
use crate::grid_renderer::GridRenderer;
use crate::input::{InputSampler, KeyPad};
use crate::screen::{Screen, SCREEN_HEIGHT, SCREEN_WIDTH};

const FRAME_RATE: u64 = 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_PATH));
    let input_mapper = config.input_mapper();

    let event_loop = EventLoop::new();
    let scale = config.window_scale as f64;
    let window = WindowBuilder::new()
        .with_title("Picross")
        .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64 * scale, SCREEN_HEIGHT as f64 * scale))
        .with_min_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
        .build(&event_loop)?;

    let mut screen = Screen::new();
    let mut graphics = GraphicsRenderer::new(&window, &screen)?;

    let renderer = GridRenderer::for_surface(&screen);
    log::info!("Cell size {}px, window scale {}x", renderer.cell_size(), config.window_scale);

    let mut state = GameState::new();
    state.draw_initial(&renderer, &mut screen);

    let mut keypad = KeyPad::new();
    let mut sampler = InputSampler::new();

    let frame_duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE);
    let mut next_frame = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    graphics.resize(size.width, size.height);
                }
                WindowEvent::Focused(false) => {
                    keypad.release_all();
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input_mapper.apply(&input, &mut keypad) {
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if let ControlFlow::ExitWithCode(_) = *control_flow {
                    return;
                }

                let now = Instant::now();
                if now >= next_frame {
                    // One scan per frame, before anything reads the keys.
                    let keys = sampler.scan(&keypad);
                    state = std::mem::take(&mut state).update(&keys, &renderer, &mut screen);

                    if let Err(err) = graphics.present(&screen) {
                        log::error!("Render error: {}", err);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }

                    next_frame += frame_duration;
                    if next_frame < now {
                        next_frame = now + frame_duration;
                    }
                }
                *control_flow = ControlFlow::WaitUntil(next_frame);
            }
            _ => {}
        }
    });
}
