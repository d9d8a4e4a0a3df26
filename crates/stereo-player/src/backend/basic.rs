//! Windowless playback backend.

use crate::backend::{check_sources, Backend, BackendError};
use crate::config::PlaybackConfig;

/// Plain-window playback session without any GUI chrome.
///
/// Honors the full fullscreen/center configuration as resolved, unlike the
/// GUI backend which manages its own window.
#[derive(Debug, Default)]
pub struct BasicPlayer {
    session: Option<PlaybackConfig>,
}

impl BasicPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for BasicPlayer {
    fn open(&mut self, config: &PlaybackConfig) -> Result<(), BackendError> {
        check_sources(&config.urls)?;
        if config.device.is_device() {
            tracing::info!(kind = ?config.device.kind, "capture device requested");
        }
        if let Some(layout) = config.layout {
            tracing::info!(layout = layout.layout.name(layout.swap), "input layout override");
        }
        if let Some(mode) = config.mode {
            tracing::info!(mode = %mode.mode, swap = mode.swap, "output mode override");
        }
        self.session = Some(config.clone());
        Ok(())
    }

    fn run(&mut self) -> Result<(), BackendError> {
        let config = self
            .session
            .as_ref()
            .ok_or_else(|| BackendError::Session("session was not opened".into()))?;
        for url in &config.urls {
            tracing::info!(source = %url, "playing");
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), BackendError> {
        self.session = None;
        Ok(())
    }
}
