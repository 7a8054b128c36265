use log::info;
use rand::rngs::ThreadRng;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    render::WindowCanvas,
    EventPump, Sdl,
};
use std::{thread, time::Instant};

use crate::{
    config::Config,
    controls::{Input, Key, PAUSED_TITLE},
    display::{BLOCKS_X, BLOCKS_Y},
    error::{GameError, Result},
    life::Life,
};

/// SDL window, renderer and event pump around a [`Life`] simulation.
/// Everything is released when the game is dropped.
pub struct Game {
    _sdl_context: Sdl,
    canvas: WindowCanvas,
    event_pump: EventPump,
    life: Life<BLOCKS_X, BLOCKS_Y>,
    rng: ThreadRng,
}

impl Game {
    pub fn new(config: Config) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Video)?;

        let (width, height) = config.layout.window_size(BLOCKS_X, BLOCKS_Y);
        let window = video_subsystem
            .window(PAUSED_TITLE, width, height)
            .position_centered()
            .build()?;

        let canvas = window.into_canvas().accelerated().present_vsync().build()?;
        let event_pump = sdl_context.event_pump().map_err(GameError::EventPump)?;

        info!(
            "Window {}x{} for a {}x{} grid, one generation every {:?}",
            width,
            height,
            BLOCKS_X,
            BLOCKS_Y,
            config.tick_interval
        );

        Ok(Self {
            _sdl_context: sdl_context,
            canvas,
            event_pump,
            life: Life::new(config, Instant::now()),
            rng: rand::thread_rng(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        while !self.life.should_quit() {
            let now = Instant::now();
            let inputs: Vec<Input> = self
                .event_pump
                .poll_iter()
                .filter_map(|event| translate(&event))
                .collect();
            for input in inputs {
                let response = self.life.handle(input, now, &mut self.rng);
                if response.title_changed {
                    self.canvas.window_mut().set_title(self.life.title())?;
                }
            }
            if self.life.should_quit() {
                break;
            }

            self.life.update(Instant::now());
            self.render()?;
            thread::sleep(self.life.config().frame_delay);
        }

        info!("Shutting down at generation {}", self.life.board().generation());
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let config = *self.life.config();

        self.canvas.set_draw_color(config.palette.background);
        self.canvas.clear();
        for (x, y, alive) in self.life.board().cells() {
            let color = if alive {
                config.palette.live
            } else {
                config.palette.dead
            };
            self.canvas.set_draw_color(color);
            self.canvas
                .fill_rect(config.layout.cell_rect(x, y))
                .map_err(GameError::Draw)?;
        }
        self.canvas.present();
        Ok(())
    }
}

fn translate(event: &Event) -> Option<Input> {
    match *event {
        Event::Quit { .. } => Some(Input::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => key_for(keycode).map(Input::KeyDown),
        Event::KeyUp {
            keycode: Some(keycode),
            ..
        } => key_for(keycode).map(Input::KeyUp),
        Event::MouseButtonDown { x, y, .. } => Some(Input::PointerDown { x, y }),
        Event::MouseButtonUp { .. } => Some(Input::PointerUp),
        Event::Window {
            win_event: WindowEvent::FocusLost,
            ..
        } => Some(Input::FocusLost),
        _ => None,
    }
}

fn key_for(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Space => Some(Key::Pause),
        Keycode::C => Some(Key::Clear),
        Keycode::R => Some(Key::Randomize),
        Keycode::N => Some(Key::Step),
        Keycode::Escape => Some(Key::Quit),
        _ => None,
    }
}
