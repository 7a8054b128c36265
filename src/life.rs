use log::{debug, info, trace};
use rand::Rng;
use std::time::Instant;

use crate::{
    board::Board,
    clock::GenerationClock,
    config::Config,
    controls::{Action, Controls, Input, RunState},
};

/// What the shell has to refresh after one input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub title_changed: bool,
}

/// The whole simulation state owned by the main loop.
pub struct Life<const W: usize, const H: usize> {
    board: Board<W, H>,
    controls: Controls,
    clock: GenerationClock,
    config: Config,
}

impl<const W: usize, const H: usize> Life<W, H> {
    pub fn new(config: Config, now: Instant) -> Self {
        Self {
            board: Board::new(),
            controls: Controls::new(),
            clock: GenerationClock::new(config.tick_interval, now),
            config,
        }
    }

    pub fn board(&self) -> &Board<W, H> {
        &self.board
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.controls.state()
    }

    pub fn title(&self) -> &'static str {
        self.controls.state().title()
    }

    pub fn should_quit(&self) -> bool {
        self.controls.should_quit()
    }

    pub fn handle<R: Rng + ?Sized>(
        &mut self,
        input: Input,
        now: Instant,
        rng: &mut R,
    ) -> Response {
        let Some(action) = self.controls.input(input) else {
            return Response::default();
        };

        match action {
            Action::Quit => {
                info!("Quit requested at generation {}", self.board.generation());
                Response::default()
            }
            Action::SetRunState(state) => {
                if state.is_running() {
                    self.clock.reset(now);
                    info!("Resumed at generation {}", self.board.generation());
                } else {
                    info!("Paused at generation {}", self.board.generation());
                }
                Response {
                    title_changed: true,
                }
            }
            Action::ToggleAt { x, y } => {
                let Some((cx, cy)) = self.config.layout.cell_at(x, y, W, H) else {
                    trace!("Click at ({x}, {y}) is outside the grid");
                    return Response::default();
                };
                let alive = self.board.toggle(cx, cy);
                debug!("Cell ({cx}, {cy}) toggled to {alive:?}");
                Response::default()
            }
            Action::Clear => {
                self.board.clear();
                info!("Board cleared");
                Response::default()
            }
            Action::Randomize => {
                self.board.randomize(rng, self.config.random_density);
                info!("Board randomized, population {}", self.board.population());
                Response::default()
            }
            Action::Step => {
                self.advance();
                Response::default()
            }
        }
    }

    /// Steps the board if running and a generation is due. Returns whether a
    /// step happened.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.controls.state().is_running() || !self.clock.poll(now) {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) {
        self.board.step();
        debug!(
            "Generation {}: population {}",
            self.board.generation(),
            self.board.population()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Key, PAUSED_TITLE, RUNNING_TITLE};
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::Duration;

    type TestLife = Life<16, 8>;

    fn setup() -> (TestLife, Instant, StdRng) {
        let now = Instant::now();
        (
            TestLife::new(Config::default(), now),
            now,
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn paused_board_does_not_step() {
        let (mut life, now, mut rng) = setup();
        life.handle(Input::PointerDown { x: 200, y: 200 }, now, &mut rng);
        assert!(!life.update(now + Duration::from_secs(10)));
        assert_eq!(life.board().generation(), 0);
        assert_eq!(life.board().population(), 1);
    }

    #[test]
    fn running_steps_on_the_clock() {
        let (mut life, now, mut rng) = setup();
        let response = life.handle(Input::KeyDown(Key::Pause), now, &mut rng);
        assert!(response.title_changed);
        assert_eq!(life.title(), RUNNING_TITLE);

        assert!(!life.update(now + Duration::from_millis(100)));
        assert!(life.update(now + Duration::from_millis(300)));
        assert!(!life.update(now + Duration::from_millis(400)));
        assert_eq!(life.board().generation(), 1);
    }

    #[test]
    fn click_toggles_cell_under_pointer() {
        let (mut life, now, mut rng) = setup();
        let response = life.handle(Input::PointerDown { x: 140, y: 70 }, now, &mut rng);
        assert!(!response.title_changed);
        assert_eq!(life.board().get(2, 1), Some(true));
    }

    #[test]
    fn click_off_grid_is_ignored() {
        let (mut life, now, mut rng) = setup();
        life.handle(Input::PointerDown { x: 1057, y: 0 }, now, &mut rng);
        assert!(life.board().is_empty());
    }

    #[test]
    fn single_step_only_while_paused() {
        let (mut life, now, mut rng) = setup();
        life.handle(Input::KeyDown(Key::Step), now, &mut rng);
        assert_eq!(life.board().generation(), 1);
        life.handle(Input::KeyUp(Key::Step), now, &mut rng);

        life.handle(Input::KeyDown(Key::Pause), now, &mut rng);
        life.handle(Input::KeyDown(Key::Step), now, &mut rng);
        assert_eq!(life.board().generation(), 1);
    }

    #[test]
    fn randomize_then_clear() {
        let (mut life, now, mut rng) = setup();
        life.handle(Input::KeyDown(Key::Randomize), now, &mut rng);
        assert!(!life.board().is_empty());
        life.handle(Input::KeyDown(Key::Clear), now, &mut rng);
        assert!(life.board().is_empty());
        assert_eq!(life.title(), PAUSED_TITLE);
    }
}
