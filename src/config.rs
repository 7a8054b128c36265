use std::time::Duration;

use crate::display::{Layout, Palette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub layout: Layout,
    pub palette: Palette,
    /// Time between generations while running.
    pub tick_interval: Duration,
    /// Sleep at the end of every frame.
    pub frame_delay: Duration,
    /// Chance of a cell being alive after a random fill.
    pub random_density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            palette: Palette::default(),
            tick_interval: Duration::from_millis(300),
            frame_delay: Duration::new(0, 1_000_000_000u32 / 60),
            random_density: 0.3,
        }
    }
}
