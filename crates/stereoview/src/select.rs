//! Backend selection: one pure decision over the resolved configuration and
//! injected environment facts.
//!
//! Keeping display availability and compiled-in features as inputs makes the
//! selector testable without a real display or a cluster runtime.

use thiserror::Error;

use stereo_player::backend::ClusterOptions;
use stereo_player::config::PlaybackConfig;
use stereoview_types::{BackendKind, ClusterArrangement, LogLevel};

use crate::resolve::Resolution;

#[derive(Debug, Error)]
pub enum SelectError {
    /// Cluster output requested but this build has no cluster support.
    #[error("this build does not include cluster rendering support")]
    UnsupportedBackend,
    /// A windowed backend needs a display connection.
    #[error("cannot connect to a display")]
    NoDisplay,
    /// The plain-window backend has nothing to play.
    #[error("no video to play")]
    NoInput,
}

/// Environment facts the selector depends on.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    pub display_available: bool,
    pub cluster_support: bool,
}

impl Environment {
    /// Probe the real process environment.
    pub fn probe() -> Self {
        Self {
            display_available: display_available(),
            cluster_support: cfg!(feature = "cluster"),
        }
    }
}

/// The chosen backend plus the configuration adjusted for it.
#[derive(Debug, Clone)]
pub struct Selection {
    pub backend: BackendKind,
    pub config: PlaybackConfig,
    pub cluster_options: ClusterOptions,
}

/// Pick exactly one backend for this session.
///
/// Cluster selection short-circuits the display check: the cluster runtime
/// brings its own display nodes.
pub fn select(
    resolution: Resolution,
    gui_requested: bool,
    env: Environment,
) -> Result<Selection, SelectError> {
    let Resolution {
        mut config,
        cluster,
        log_level_explicit,
        cluster_options,
    } = resolution;

    let backend = if let Some(arrangement) = cluster {
        if !env.cluster_support {
            return Err(SelectError::UnsupportedBackend);
        }
        match arrangement {
            ClusterArrangement::Flat => BackendKind::ClusterFlat,
            ClusterArrangement::ThreeD => BackendKind::Cluster3d,
        }
    } else if !env.display_available {
        return Err(SelectError::NoDisplay);
    } else if gui_requested {
        // The GUI manages its own window chrome and is quiet by default.
        if !log_level_explicit {
            config.log_level = LogLevel::Warning;
        }
        config.fullscreen = false;
        config.center = false;
        BackendKind::Gui
    } else {
        if config.urls.is_empty() {
            return Err(SelectError::NoInput);
        }
        BackendKind::Basic
    };

    Ok(Selection {
        backend,
        config,
        cluster_options,
    })
}

/// On Unix (excluding macOS) a usable display means DISPLAY or
/// WAYLAND_DISPLAY is set and non-empty; elsewhere one is assumed.
fn display_available() -> bool {
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()))
    }
    #[cfg(not(all(unix, not(target_os = "macos"))))]
    {
        true
    }
}
