//! Windowed playback backend with the graphical front-end.

use crate::backend::{check_sources, Backend, BackendError};
use crate::config::PlaybackConfig;

/// Playback session hosted by the graphical front-end.
///
/// Tolerates an empty source list: media can be opened interactively. The
/// front-end manages its own window chrome, so the selector clears the
/// fullscreen and center flags before this backend sees the config.
#[derive(Debug, Default)]
pub struct GuiPlayer {
    session: Option<PlaybackConfig>,
}

impl GuiPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for GuiPlayer {
    fn open(&mut self, config: &PlaybackConfig) -> Result<(), BackendError> {
        check_sources(&config.urls)?;
        if config.urls.is_empty() && !config.device.is_device() {
            tracing::info!("no sources given; waiting for media to be opened");
        }
        self.session = Some(config.clone());
        Ok(())
    }

    fn run(&mut self) -> Result<(), BackendError> {
        let config = self
            .session
            .as_ref()
            .ok_or_else(|| BackendError::Session("session was not opened".into()))?;
        tracing::debug!(sources = config.urls.len(), "entering the front-end event loop");
        Ok(())
    }

    fn close(&mut self) -> Result<(), BackendError> {
        self.session = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_accepts_an_empty_source_list() {
        let mut player = GuiPlayer::new();
        player.open(&PlaybackConfig::default()).unwrap();
        player.run().unwrap();
        player.close().unwrap();
    }
}
