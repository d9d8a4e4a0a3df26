//! Cluster-rendered playback backend.
//!
//! Distributes rendering across multiple display nodes under the external
//! clustering runtime; this shell owns the session configuration and the
//! pass-through options the runtime consumes.

use stereoview_types::ClusterArrangement;

use crate::backend::{check_sources, Backend, BackendError, ClusterOptions};
use crate::config::PlaybackConfig;

/// Playback session distributed over a display cluster.
#[derive(Debug)]
pub struct ClusterPlayer {
    arrangement: ClusterArrangement,
    options: ClusterOptions,
    session: Option<PlaybackConfig>,
}

impl ClusterPlayer {
    pub fn new(arrangement: ClusterArrangement, options: ClusterOptions) -> Self {
        Self {
            arrangement,
            options,
            session: None,
        }
    }
}

impl Backend for ClusterPlayer {
    fn open(&mut self, config: &PlaybackConfig) -> Result<(), BackendError> {
        check_sources(&config.urls)?;
        tracing::info!(
            arrangement = ?self.arrangement,
            server = self.options.server.as_deref().unwrap_or("local"),
            "connecting to the cluster runtime"
        );
        if let Some(cluster_config) = &self.options.config {
            tracing::info!(config = %cluster_config, "cluster configuration");
        }
        self.session = Some(config.clone());
        Ok(())
    }

    fn run(&mut self) -> Result<(), BackendError> {
        let config = self
            .session
            .as_ref()
            .ok_or_else(|| BackendError::Session("session was not opened".into()))?;
        tracing::debug!(sources = config.urls.len(), "cluster session running");
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
    fn lifecycle_with_a_remote_source() {
        let config = PlaybackConfig {
            urls: vec!["http://example.org/movie.mkv".to_string()],
            ..PlaybackConfig::default()
        };
        let mut player = ClusterPlayer::new(ClusterArrangement::ThreeD, ClusterOptions::default());
        player.open(&config).unwrap();
        player.run().unwrap();
        player.close().unwrap();
    }
}
