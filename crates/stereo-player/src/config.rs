//! Playback session configuration shared by all backends.
//!
//! A [`PlaybackConfig`] is resolved once at startup, adjusted only by the
//! backend selector's override step, and read-only for the rest of the
//! session.

use serde::{Deserialize, Serialize};

use stereoview_types::{LayoutOverride, LogLevel, ModeOverride};

/// Kind of capture device requested as a media source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    /// No capture device; sources are files or URLs.
    #[default]
    None,
    /// The platform default capture device.
    SystemDefault,
    /// A FireWire (IEEE 1394) camera.
    Firewire,
    /// X11 screen grabbing.
    X11,
}

/// A live capture device request as an alternative to file sources.
///
/// Frame size and rate fields are either both zero (unspecified) or both
/// positive; the resolver guards this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRequest {
    pub kind: DeviceKind,
    pub width: u32,
    pub height: u32,
    pub frame_rate_num: u32,
    pub frame_rate_den: u32,
}

impl DeviceRequest {
    /// `true` when any capture device was requested.
    pub fn is_device(&self) -> bool {
        self.kind != DeviceKind::None
    }
}

/// Subtitle rendering parameters.
///
/// `None` fields keep the renderer default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleParams {
    pub encoding: Option<String>,
    pub font: Option<String>,
    pub size: Option<u32>,
    pub scale: Option<f32>,
    /// `[AA]RRGGBB` color value.
    pub color: Option<u32>,
    /// Subtitle depth adjustment in [-1, 1].
    pub parallax: f32,
}

/// One playback session's resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub device: DeviceRequest,
    /// Ordered source URLs. May be empty only when a device request or the
    /// GUI backend provides the input.
    pub urls: Vec<String>,
    /// 0-based video stream selector.
    pub video_stream: usize,
    /// 0-based audio stream selector.
    pub audio_stream: usize,
    /// 0-based subtitle stream selector; `None` renders no subtitles.
    pub subtitle_stream: Option<usize>,
    /// Input layout override; `None` means autodetect from media.
    pub layout: Option<LayoutOverride>,
    /// Output mode override; `None` lets the backend decide.
    pub mode: Option<ModeOverride>,
    /// Present the right view to the left eye and vice versa, whatever mode
    /// ends up active.
    pub swap_eyes: bool,
    pub fullscreen: bool,
    /// Bit i set = use 1-based screen i+1 in fullscreen mode; 0 means the
    /// primary screen.
    pub fullscreen_screens: u16,
    pub fullscreen_flip_left: bool,
    pub fullscreen_flop_left: bool,
    pub fullscreen_flip_right: bool,
    pub fullscreen_flop_right: bool,
    /// Zoom for wide videos, 0 (off) to 1 (full).
    pub zoom: f32,
    /// Center the window on screen.
    pub center: bool,
    pub subtitle: SubtitleParams,
    /// Parallax adjustment in [-1, 1].
    pub parallax: f32,
    /// Crosstalk leak level per R,G,B channel, each in [0, 1].
    pub crosstalk: [f32; 3],
    /// Amount of ghostbusting to apply, in [0, 1].
    pub ghostbust: f32,
    /// Disable audio and time synchronization, show fps.
    pub benchmark: bool,
    /// Restart the media when it ends.
    pub loop_media: bool,
    pub log_level: LogLevel,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            device: DeviceRequest::default(),
            urls: Vec::new(),
            video_stream: 0,
            audio_stream: 0,
            subtitle_stream: None,
            layout: None,
            mode: None,
            swap_eyes: false,
            fullscreen: false,
            fullscreen_screens: 0,
            fullscreen_flip_left: false,
            fullscreen_flop_left: false,
            fullscreen_flip_right: false,
            fullscreen_flop_right: false,
            zoom: 0.0,
            center: false,
            subtitle: SubtitleParams::default(),
            parallax: 0.0,
            crosstalk: [0.0; 3],
            ghostbust: 0.0,
            benchmark: false,
            loop_media: false,
            log_level: LogLevel::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_first_streams_and_no_subtitles() {
        let config = PlaybackConfig::default();
        assert_eq!(config.video_stream, 0);
        assert_eq!(config.audio_stream, 0);
        assert_eq!(config.subtitle_stream, None);
    }

    #[test]
    fn defaults_leave_overrides_unset() {
        let config = PlaybackConfig::default();
        assert!(config.layout.is_none());
        assert!(config.mode.is_none());
        assert!(!config.device.is_device());
        assert_eq!(config.fullscreen_screens, 0);
        assert_eq!(config.log_level, LogLevel::Info);
    }
}
