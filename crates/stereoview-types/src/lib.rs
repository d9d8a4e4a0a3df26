//! Shared stereo vocabulary for the stereoview player.
//!
//! These types cross crate boundaries (CLI surface, config resolver, playback
//! backends), so they live here without any playback logic. Name tables are
//! the single source of truth for both option validation and translation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A mode name outside the fixed vocabulary.
///
/// The option layer restricts input to the vocabulary first, so hitting this
/// means a caller bypassed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode name: {name}")]
pub struct UnknownModeError {
    pub name: String,
}

impl UnknownModeError {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Input layout vocabulary accepted by `--input`, in help order.
pub const STEREO_LAYOUT_NAMES: [&str; 13] = [
    "mono",
    "separate-left-right",
    "separate-right-left",
    "top-bottom",
    "top-bottom-half",
    "bottom-top",
    "bottom-top-half",
    "left-right",
    "left-right-half",
    "right-left",
    "right-left-half",
    "even-odd-rows",
    "odd-even-rows",
];

/// How left/right eye images are packed within or across input streams.
///
/// Right-first spellings of the vocabulary ("right-left", "bottom-top",
/// "odd-even-rows", "separate-right-left") map to the same variant as their
/// left-first counterpart plus an eye-order swap bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StereoLayout {
    /// Single view.
    Mono,
    /// Left/right in separate streams.
    Separate,
    /// One view on top of the other.
    TopBottom,
    /// One view on top of the other, half height.
    TopBottomHalf,
    /// Views side by side.
    LeftRight,
    /// Views side by side, half width.
    LeftRightHalf,
    /// Views interleaved by row.
    EvenOddRows,
}

impl StereoLayout {
    /// Translate a vocabulary name into a layout plus its eye-order swap.
    pub fn from_name(name: &str) -> Result<(Self, bool), UnknownModeError> {
        let pair = match name {
            "mono" => (Self::Mono, false),
            "separate-left-right" => (Self::Separate, false),
            "separate-right-left" => (Self::Separate, true),
            "top-bottom" => (Self::TopBottom, false),
            "top-bottom-half" => (Self::TopBottomHalf, false),
            "bottom-top" => (Self::TopBottom, true),
            "bottom-top-half" => (Self::TopBottomHalf, true),
            "left-right" => (Self::LeftRight, false),
            "left-right-half" => (Self::LeftRightHalf, false),
            "right-left" => (Self::LeftRight, true),
            "right-left-half" => (Self::LeftRightHalf, true),
            "even-odd-rows" => (Self::EvenOddRows, false),
            "odd-even-rows" => (Self::EvenOddRows, true),
            _ => return Err(UnknownModeError::new(name)),
        };
        Ok(pair)
    }

    /// Vocabulary name for this layout with the given eye order.
    ///
    /// `Mono` has a single view; its swap bit is meaningless and ignored.
    pub fn name(&self, swap: bool) -> &'static str {
        match (self, swap) {
            (Self::Mono, _) => "mono",
            (Self::Separate, false) => "separate-left-right",
            (Self::Separate, true) => "separate-right-left",
            (Self::TopBottom, false) => "top-bottom",
            (Self::TopBottom, true) => "bottom-top",
            (Self::TopBottomHalf, false) => "top-bottom-half",
            (Self::TopBottomHalf, true) => "bottom-top-half",
            (Self::LeftRight, false) => "left-right",
            (Self::LeftRight, true) => "right-left",
            (Self::LeftRightHalf, false) => "left-right-half",
            (Self::LeftRightHalf, true) => "right-left-half",
            (Self::EvenOddRows, false) => "even-odd-rows",
            (Self::EvenOddRows, true) => "odd-even-rows",
        }
    }
}

/// Output mode vocabulary accepted by `--output`, in help order.
///
/// `equalizer` and `equalizer-3d` select the cluster backend instead of a
/// rendering mode and therefore have no [`StereoMode`] variant.
pub const STEREO_MODE_NAMES: [&str; 27] = [
    "mono-left",
    "mono-right",
    "top-bottom",
    "top-bottom-half",
    "left-right",
    "left-right-half",
    "even-odd-rows",
    "even-odd-columns",
    "checkerboard",
    "hdmi-frame-pack",
    "red-cyan-monochrome",
    "red-cyan-half-color",
    "red-cyan-full-color",
    "red-cyan-dubois",
    "green-magenta-monochrome",
    "green-magenta-half-color",
    "green-magenta-full-color",
    "green-magenta-dubois",
    "amber-blue-monochrome",
    "amber-blue-half-color",
    "amber-blue-full-color",
    "amber-blue-dubois",
    "red-green-monochrome",
    "red-blue-monochrome",
    "stereo",
    "equalizer",
    "equalizer-3d",
];

/// The two `--output` values that request cluster rendering.
pub const CLUSTER_MODE_NAMES: [&str; 2] = ["equalizer", "equalizer-3d"];

/// How the player composes left/right images for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StereoMode {
    /// Only the left view.
    MonoLeft,
    /// Only the right view.
    MonoRight,
    /// Left top, right bottom.
    TopBottom,
    /// Left top, right bottom, half height.
    TopBottomHalf,
    /// Left left, right right.
    LeftRight,
    /// Left left, right right, half width.
    LeftRightHalf,
    /// Left even rows, right odd rows.
    EvenOddRows,
    /// Left even columns, right odd columns.
    EvenOddColumns,
    /// Left and right in a checkerboard pattern.
    Checkerboard,
    /// HDMI frame packing.
    HdmiFramePack,
    RedCyanMonochrome,
    RedCyanHalfColor,
    RedCyanFullColor,
    RedCyanDubois,
    GreenMagentaMonochrome,
    GreenMagentaHalfColor,
    GreenMagentaFullColor,
    GreenMagentaDubois,
    AmberBlueMonochrome,
    AmberBlueHalfColor,
    AmberBlueFullColor,
    AmberBlueDubois,
    RedGreenMonochrome,
    RedBlueMonochrome,
    /// OpenGL quad-buffered stereo.
    Stereo,
}

impl StereoMode {
    /// Translate a vocabulary name into a rendering mode.
    ///
    /// The swap bit of a freshly translated mode is always `false`; the
    /// explicit swap-eyes flag is applied on top by the resolver. Cluster
    /// names ("equalizer", "equalizer-3d") are not rendering modes and fail
    /// here.
    pub fn from_name(name: &str) -> Result<(Self, bool), UnknownModeError> {
        let mode = match name {
            "mono-left" => Self::MonoLeft,
            "mono-right" => Self::MonoRight,
            "top-bottom" => Self::TopBottom,
            "top-bottom-half" => Self::TopBottomHalf,
            "left-right" => Self::LeftRight,
            "left-right-half" => Self::LeftRightHalf,
            "even-odd-rows" => Self::EvenOddRows,
            "even-odd-columns" => Self::EvenOddColumns,
            "checkerboard" => Self::Checkerboard,
            "hdmi-frame-pack" => Self::HdmiFramePack,
            "red-cyan-monochrome" => Self::RedCyanMonochrome,
            "red-cyan-half-color" => Self::RedCyanHalfColor,
            "red-cyan-full-color" => Self::RedCyanFullColor,
            "red-cyan-dubois" => Self::RedCyanDubois,
            "green-magenta-monochrome" => Self::GreenMagentaMonochrome,
            "green-magenta-half-color" => Self::GreenMagentaHalfColor,
            "green-magenta-full-color" => Self::GreenMagentaFullColor,
            "green-magenta-dubois" => Self::GreenMagentaDubois,
            "amber-blue-monochrome" => Self::AmberBlueMonochrome,
            "amber-blue-half-color" => Self::AmberBlueHalfColor,
            "amber-blue-full-color" => Self::AmberBlueFullColor,
            "amber-blue-dubois" => Self::AmberBlueDubois,
            "red-green-monochrome" => Self::RedGreenMonochrome,
            "red-blue-monochrome" => Self::RedBlueMonochrome,
            "stereo" => Self::Stereo,
            _ => return Err(UnknownModeError::new(name)),
        };
        Ok((mode, false))
    }

    /// Vocabulary name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MonoLeft => "mono-left",
            Self::MonoRight => "mono-right",
            Self::TopBottom => "top-bottom",
            Self::TopBottomHalf => "top-bottom-half",
            Self::LeftRight => "left-right",
            Self::LeftRightHalf => "left-right-half",
            Self::EvenOddRows => "even-odd-rows",
            Self::EvenOddColumns => "even-odd-columns",
            Self::Checkerboard => "checkerboard",
            Self::HdmiFramePack => "hdmi-frame-pack",
            Self::RedCyanMonochrome => "red-cyan-monochrome",
            Self::RedCyanHalfColor => "red-cyan-half-color",
            Self::RedCyanFullColor => "red-cyan-full-color",
            Self::RedCyanDubois => "red-cyan-dubois",
            Self::GreenMagentaMonochrome => "green-magenta-monochrome",
            Self::GreenMagentaHalfColor => "green-magenta-half-color",
            Self::GreenMagentaFullColor => "green-magenta-full-color",
            Self::GreenMagentaDubois => "green-magenta-dubois",
            Self::AmberBlueMonochrome => "amber-blue-monochrome",
            Self::AmberBlueHalfColor => "amber-blue-half-color",
            Self::AmberBlueFullColor => "amber-blue-full-color",
            Self::AmberBlueDubois => "amber-blue-dubois",
            Self::RedGreenMonochrome => "red-green-monochrome",
            Self::RedBlueMonochrome => "red-blue-monochrome",
            Self::Stereo => "stereo",
        }
    }
}

impl std::fmt::Display for StereoMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An explicit input-layout override; absence means autodetect from media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOverride {
    pub layout: StereoLayout,
    /// Right view comes first in the source.
    pub swap: bool,
}

/// An explicit output-mode override; absence lets the backend decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeOverride {
    pub mode: StereoMode,
    /// Present the right view to the left eye and vice versa.
    pub swap: bool,
}

/// Log level vocabulary accepted by `--log-level`.
pub const LOG_LEVEL_NAMES: [&str; 5] = ["debug", "info", "warning", "error", "quiet"];

/// Message verbosity selected with `--log-level`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    /// Only output that was explicitly requested.
    Quiet,
}

impl LogLevel {
    pub fn from_name(name: &str) -> Result<Self, UnknownModeError> {
        let level = match name {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "quiet" => Self::Quiet,
            _ => return Err(UnknownModeError::new(name)),
        };
        Ok(level)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Quiet => "quiet",
        }
    }
}

/// Identity of the playback backend driving one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Windowless playback, no GUI chrome.
    Basic,
    /// The graphical front-end.
    Gui,
    /// Cluster rendering on a flat screen arrangement.
    ClusterFlat,
    /// Cluster rendering on a 3D screen arrangement.
    Cluster3d,
}

/// Screen arrangement requested from the cluster runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClusterArrangement {
    Flat,
    ThreeD,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn layout_translation_is_total() {
        for name in STEREO_LAYOUT_NAMES {
            StereoLayout::from_name(name).expect(name);
        }
    }

    #[test]
    fn layout_translation_is_injective() {
        let mut seen = HashSet::new();
        for name in STEREO_LAYOUT_NAMES {
            let pair = StereoLayout::from_name(name).unwrap();
            assert!(seen.insert(pair), "duplicate translation for {name}");
        }
    }

    #[test]
    fn layout_names_round_trip() {
        for name in STEREO_LAYOUT_NAMES {
            let (layout, swap) = StereoLayout::from_name(name).unwrap();
            assert_eq!(layout.name(swap), name);
        }
    }

    #[test]
    fn right_first_layouts_set_swap() {
        for name in ["separate-right-left", "bottom-top", "bottom-top-half", "right-left", "right-left-half", "odd-even-rows"] {
            let (_, swap) = StereoLayout::from_name(name).unwrap();
            assert!(swap, "{name} should swap");
        }
        for name in ["mono", "separate-left-right", "top-bottom", "left-right", "even-odd-rows"] {
            let (_, swap) = StereoLayout::from_name(name).unwrap();
            assert!(!swap, "{name} should not swap");
        }
    }

    #[test]
    fn mode_translation_covers_all_render_names() {
        let mut seen = HashSet::new();
        for name in STEREO_MODE_NAMES {
            if CLUSTER_MODE_NAMES.contains(&name) {
                continue;
            }
            let (mode, swap) = StereoMode::from_name(name).expect(name);
            assert!(!swap, "translated swap must start false for {name}");
            assert!(seen.insert(mode), "duplicate translation for {name}");
            assert_eq!(mode.name(), name);
        }
        assert_eq!(seen.len(), STEREO_MODE_NAMES.len() - CLUSTER_MODE_NAMES.len());
    }

    #[test]
    fn cluster_names_are_not_render_modes() {
        for name in CLUSTER_MODE_NAMES {
            assert!(StereoMode::from_name(name).is_err(), "{name} must not translate");
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = StereoLayout::from_name("sideways").unwrap_err();
        assert_eq!(err.name, "sideways");
        assert!(StereoMode::from_name("").is_err());
        assert!(LogLevel::from_name("verbose").is_err());
    }

    #[test]
    fn log_level_names_round_trip() {
        for name in LOG_LEVEL_NAMES {
            assert_eq!(LogLevel::from_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn modes_serialize_as_vocabulary_names() {
        let json = serde_json::to_string(&StereoMode::RedCyanDubois).unwrap();
        assert_eq!(json, "\"red-cyan-dubois\"");
        let mode: StereoMode = serde_json::from_str("\"hdmi-frame-pack\"").unwrap();
        assert_eq!(mode, StereoMode::HdmiFramePack);
    }

    #[test]
    fn backend_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&BackendKind::ClusterFlat).unwrap();
        assert_eq!(json, "\"cluster-flat\"");
    }
}
