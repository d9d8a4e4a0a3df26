//! Backend lifecycle driver.
//!
//! Constructs the selected backend and drives open/run/close. `close` is
//! attempted exactly once on every constructed instance, success or failure,
//! and a close error never masks the primary result.

use anyhow::Result;

use stereo_player::backend::{self, Backend, BackendError};
use stereo_player::config::PlaybackConfig;

use crate::select::Selection;

pub fn run_session(selection: Selection) -> Result<()> {
    let Selection {
        backend: kind,
        config,
        cluster_options,
    } = selection;

    let mut player = backend::create(kind, cluster_options)?;
    tracing::info!(backend = ?kind, sources = config.urls.len(), "starting playback session");
    if config.benchmark {
        tracing::info!("benchmark mode: audio and time synchronization disabled");
    }
    drive(player.as_mut(), &config)?;
    Ok(())
}

/// Run one open/run/close cycle with guaranteed best-effort teardown.
fn drive(player: &mut dyn Backend, config: &PlaybackConfig) -> Result<(), BackendError> {
    let result = player.open(config).and_then(|()| player.run());
    if let Err(err) = player.close() {
        tracing::warn!("backend close failed: {err}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recording {
        calls: Vec<&'static str>,
        fail_open: bool,
        fail_run: bool,
        fail_close: bool,
    }

    impl Backend for Recording {
        fn open(&mut self, _config: &PlaybackConfig) -> Result<(), BackendError> {
            self.calls.push("open");
            if self.fail_open {
                return Err(BackendError::Session("open failed".into()));
            }
            Ok(())
        }

        fn run(&mut self) -> Result<(), BackendError> {
            self.calls.push("run");
            if self.fail_run {
                return Err(BackendError::Session("run failed".into()));
            }
            Ok(())
        }

        fn close(&mut self) -> Result<(), BackendError> {
            self.calls.push("close");
            if self.fail_close {
                return Err(BackendError::Session("close failed".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn clean_session_closes_once() {
        let mut player = Recording::default();
        drive(&mut player, &PlaybackConfig::default()).unwrap();
        assert_eq!(player.calls, ["open", "run", "close"]);
    }

    #[test]
    fn open_failure_skips_run_but_still_closes() {
        let mut player = Recording {
            fail_open: true,
            ..Recording::default()
        };
        assert!(drive(&mut player, &PlaybackConfig::default()).is_err());
        assert_eq!(player.calls, ["open", "close"]);
    }

    #[test]
    fn run_failure_still_closes() {
        let mut player = Recording {
            fail_run: true,
            ..Recording::default()
        };
        assert!(drive(&mut player, &PlaybackConfig::default()).is_err());
        assert_eq!(player.calls, ["open", "run", "close"]);
    }

    #[test]
    fn close_failure_never_masks_the_primary_result() {
        let mut player = Recording {
            fail_close: true,
            ..Recording::default()
        };
        assert!(drive(&mut player, &PlaybackConfig::default()).is_ok());

        let mut player = Recording {
            fail_run: true,
            fail_close: true,
            ..Recording::default()
        };
        let err = drive(&mut player, &PlaybackConfig::default()).unwrap_err();
        assert!(err.to_string().contains("run failed"));
    }
}
