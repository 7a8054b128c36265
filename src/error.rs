use sdl2::{video::WindowBuildError, IntegerOrSdlError};
use std::ffi::NulError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("SDL could not initialize: {0}")]
    Sdl(String),
    #[error("video subsystem could not initialize: {0}")]
    Video(String),
    #[error("window could not be created: {0}")]
    Window(#[from] WindowBuildError),
    #[error("renderer could not be created: {0}")]
    Canvas(#[from] IntegerOrSdlError),
    #[error("event pump could not be created: {0}")]
    EventPump(String),
    #[error("failed to draw cell: {0}")]
    Draw(String),
    #[error("failed to set window title: {0}")]
    Title(#[from] NulError),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_step() {
        let cases = [
            (GameError::Sdl("no driver".into()), "SDL could not initialize"),
            (GameError::Video("no display".into()), "video subsystem"),
            (GameError::EventPump("busy".into()), "event pump"),
            (GameError::Draw("lost device".into()), "failed to draw cell"),
        ];
        for (err, step) in cases {
            let message = err.to_string();
            assert!(message.contains(step), "{message:?} should name {step:?}");
        }
    }

    #[test]
    fn messages_keep_the_sdl_detail() {
        let err = GameError::Video("no display".into());
        assert_eq!(err.to_string(), "video subsystem could not initialize: no display");
    }

    #[test]
    fn title_error_converts_from_nul_error() {
        let nul = std::ffi::CString::new("bad\0title").unwrap_err();
        let err: GameError = nul.into();
        assert!(err.to_string().starts_with("failed to set window title"));
    }
}
