pub mod board;
pub mod clock;
pub mod config;
pub mod controls;
pub mod display;
pub mod error;
pub mod game;
pub mod life;
