//! Playback backend lifecycle contract and session shells.
//!
//! A backend owns exactly one playback session: `open` takes the resolved
//! configuration and acquires session resources, `run` runs the session to
//! completion, `close` releases whatever `open` acquired. Frame decode and
//! presentation are the render pipeline's business; the shells here own
//! source checkout, configuration hand-off, and teardown.

mod basic;
#[cfg(feature = "cluster")]
mod cluster;
mod gui;

use thiserror::Error;

use stereoview_types::BackendKind;

use crate::config::PlaybackConfig;

pub use basic::BasicPlayer;
#[cfg(feature = "cluster")]
pub use cluster::ClusterPlayer;
pub use gui::GuiPlayer;

/// Errors surfaced by backend construction and lifecycle calls.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A configured source could not be opened.
    #[error("cannot open {url}: {source}")]
    OpenSource {
        url: String,
        source: std::io::Error,
    },
    /// Opaque session failure from the renderer or its runtime.
    #[error("{0}")]
    Session(String),
    /// The requested backend is not part of this build.
    #[error("this build does not include {0} support")]
    NotCompiled(&'static str),
}

/// One playback session's lifecycle.
///
/// Callers invoke `open` then `run`; `close` must be attempted exactly once
/// on every constructed instance and is best-effort.
pub trait Backend: std::fmt::Debug {
    fn open(&mut self, config: &PlaybackConfig) -> Result<(), BackendError>;
    fn run(&mut self) -> Result<(), BackendError>;
    fn close(&mut self) -> Result<(), BackendError>;
}

/// Options handed through to the cluster rendering runtime.
///
/// Accepted on the command line regardless of build features, consumed only
/// by [`ClusterPlayer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterOptions {
    pub server: Option<String>,
    pub config: Option<String>,
    pub listen: Option<String>,
    pub log_file: Option<String>,
    pub render_client: Option<String>,
}

/// Construct the session shell for `kind`.
///
/// Cluster kinds require the `cluster` cargo feature; without it this fails
/// with [`BackendError::NotCompiled`] (selection normally rules that out
/// first).
pub fn create(
    kind: BackendKind,
    cluster_options: ClusterOptions,
) -> Result<Box<dyn Backend>, BackendError> {
    match kind {
        BackendKind::Basic => Ok(Box::new(BasicPlayer::new())),
        BackendKind::Gui => Ok(Box::new(GuiPlayer::new())),
        BackendKind::ClusterFlat | BackendKind::Cluster3d => {
            cluster_backend(kind, cluster_options)
        }
    }
}

#[cfg(feature = "cluster")]
fn cluster_backend(
    kind: BackendKind,
    options: ClusterOptions,
) -> Result<Box<dyn Backend>, BackendError> {
    use stereoview_types::ClusterArrangement;

    let arrangement = match kind {
        BackendKind::Cluster3d => ClusterArrangement::ThreeD,
        _ => ClusterArrangement::Flat,
    };
    Ok(Box::new(ClusterPlayer::new(arrangement, options)))
}

#[cfg(not(feature = "cluster"))]
fn cluster_backend(
    _kind: BackendKind,
    _options: ClusterOptions,
) -> Result<Box<dyn Backend>, BackendError> {
    Err(BackendError::NotCompiled("cluster rendering"))
}

/// Check that every local source path exists.
///
/// Sources with a URL scheme are resolved by the media layer later and are
/// not checked here; capture device paths resolve like any other path.
fn check_sources(urls: &[String]) -> Result<(), BackendError> {
    for url in urls {
        if url.contains("://") {
            continue;
        }
        if let Err(source) = std::fs::metadata(url) {
            return Err(BackendError::OpenSource {
                url: url.clone(),
                source,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_covers_the_windowed_backends() {
        assert!(create(BackendKind::Basic, ClusterOptions::default()).is_ok());
        assert!(create(BackendKind::Gui, ClusterOptions::default()).is_ok());
    }

    #[cfg(not(feature = "cluster"))]
    #[test]
    fn cluster_backends_require_the_feature() {
        let err = create(BackendKind::ClusterFlat, ClusterOptions::default()).unwrap_err();
        assert!(matches!(err, BackendError::NotCompiled(_)));
    }

    #[cfg(feature = "cluster")]
    #[test]
    fn cluster_backends_construct_with_the_feature() {
        assert!(create(BackendKind::Cluster3d, ClusterOptions::default()).is_ok());
    }

    #[test]
    fn scheme_sources_are_not_probed() {
        assert!(check_sources(&["http://example.org/movie.mkv".to_string()]).is_ok());
    }

    #[test]
    fn missing_local_sources_are_reported() {
        let err = check_sources(&["/nonexistent/movie.mkv".to_string()]).unwrap_err();
        assert!(matches!(err, BackendError::OpenSource { .. }));
    }
}
