use std::collections::HashSet;

pub const PAUSED_TITLE: &str = "(paused) Game Of Life";
pub const RUNNING_TITLE: &str = "Game Of Life";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Pause,
    Clear,
    Randomize,
    Step,
    Quit,
}

/// Platform-independent input, translated from window events by the game shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    PointerDown { x: i32, y: i32 },
    PointerUp,
    /// The window lost keyboard focus; releases will go elsewhere.
    FocusLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }

    pub fn title(self) -> &'static str {
        match self {
            RunState::Paused => PAUSED_TITLE,
            RunState::Running => RUNNING_TITLE,
        }
    }
}

/// What an input asks the simulation to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SetRunState(RunState),
    ToggleAt { x: i32, y: i32 },
    Clear,
    Randomize,
    Step,
}

/// Edge-triggered input state machine.
///
/// Every key carries its own latch: a key-down only counts if the key was up
/// before, so auto-repeat while held is ignored. The pointer shares one latch
/// for all buttons and must be released before the next press registers.
#[derive(Debug, Default)]
pub struct Controls {
    state: RunState,
    quit: bool,
    held_keys: HashSet<Key>,
    pointer_held: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn input(&mut self, input: Input) -> Option<Action> {
        match input {
            Input::Quit => {
                self.quit = true;
                Some(Action::Quit)
            }
            Input::KeyDown(key) => {
                if !self.held_keys.insert(key) {
                    return None;
                }
                self.key_pressed(key)
            }
            Input::KeyUp(key) => {
                self.held_keys.remove(&key);
                None
            }
            Input::PointerDown { x, y } => {
                if self.pointer_held {
                    return None;
                }
                self.pointer_held = true;
                Some(Action::ToggleAt { x, y })
            }
            Input::PointerUp => {
                self.pointer_held = false;
                None
            }
            Input::FocusLost => {
                self.held_keys.clear();
                self.pointer_held = false;
                None
            }
        }
    }

    fn key_pressed(&mut self, key: Key) -> Option<Action> {
        match key {
            Key::Pause => {
                self.state = self.state.toggled();
                Some(Action::SetRunState(self.state))
            }
            Key::Clear => Some(Action::Clear),
            Key::Randomize => Some(Action::Randomize),
            // single-stepping only makes sense while paused
            Key::Step if self.state.is_running() => None,
            Key::Step => Some(Action::Step),
            Key::Quit => {
                self.quit = true;
                Some(Action::Quit)
            }
        }
    }
}
