//! Config resolution: raw option values into one `PlaybackConfig`.
//!
//! Applies defaults, device autodetection, and cross-option override rules.
//! The output is immutable except for the backend selector's override step.

use thiserror::Error;

use stereo_player::backend::ClusterOptions;
use stereo_player::config::{DeviceKind, PlaybackConfig, SubtitleParams};
use stereoview_types::{
    ClusterArrangement, LayoutOverride, LogLevel, ModeOverride, StereoLayout, StereoMode,
    UnknownModeError,
};

use crate::cli::Args;

/// A raw option value outside its contract.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },
    #[error(transparent)]
    UnknownMode(#[from] UnknownModeError),
}

/// Resolver output: the config plus the facts the backend selector needs.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub config: PlaybackConfig,
    /// Set when `--output` named a cluster arrangement instead of a mode.
    pub cluster: Option<ClusterArrangement>,
    /// `true` when the user set a log level explicitly.
    pub log_level_explicit: bool,
    /// Pass-through options for the cluster runtime.
    pub cluster_options: ClusterOptions,
}

/// Prefix that marks a lone positional argument as a capture device path.
const DEVICE_PATH_PREFIX: &str = "/dev/";

pub fn resolve(args: &Args) -> Result<Resolution, ResolveError> {
    let mut config = PlaybackConfig::default();

    config.log_level = match args.log_level.as_deref() {
        Some(name) => LogLevel::from_name(name)?,
        None => LogLevel::Info,
    };

    config.device.kind = match args.device_type.as_deref() {
        None => {
            if args.files.len() == 1 && args.files[0].starts_with(DEVICE_PATH_PREFIX) {
                DeviceKind::SystemDefault
            } else {
                DeviceKind::None
            }
        }
        Some("firewire") => DeviceKind::Firewire,
        Some("x11") => DeviceKind::X11,
        // "default" and, deliberately, any unrecognized type string.
        Some(_) => DeviceKind::SystemDefault,
    };
    if let Some((width, height)) = args.device_frame_size {
        if width == 0 || height == 0 {
            return Err(ResolveError::Validation {
                field: "device-frame-size",
                reason: "width and height must both be positive",
            });
        }
        config.device.width = width;
        config.device.height = height;
    }
    if let Some((num, den)) = args.device_frame_rate {
        if num == 0 || den == 0 {
            return Err(ResolveError::Validation {
                field: "device-frame-rate",
                reason: "numerator and denominator must both be positive",
            });
        }
        config.device.frame_rate_num = num;
        config.device.frame_rate_den = den;
    }

    config.urls = args.files.clone();
    config.video_stream = args.video.saturating_sub(1) as usize;
    config.audio_stream = args.audio.saturating_sub(1) as usize;
    config.subtitle_stream = args.subtitle.checked_sub(1).map(|s| s as usize);

    if let Some(name) = args.input.as_deref() {
        let (layout, swap) = StereoLayout::from_name(name)?;
        config.layout = Some(LayoutOverride { layout, swap });
    }

    let mut cluster = None;
    match args.output.as_deref() {
        None => {}
        Some("equalizer") => {
            cluster = Some(ClusterArrangement::Flat);
            config.mode = Some(neutral_mode(args.swap_eyes));
        }
        Some("equalizer-3d") => {
            cluster = Some(ClusterArrangement::ThreeD);
            config.mode = Some(neutral_mode(args.swap_eyes));
        }
        Some(name) => {
            let (mode, _) = StereoMode::from_name(name)?;
            // The explicit swap-eyes flag wins over the translated swap bit.
            config.mode = Some(ModeOverride {
                mode,
                swap: args.swap_eyes,
            });
        }
    }
    config.swap_eyes = args.swap_eyes;

    config.fullscreen = args.fullscreen;
    if !args.fullscreen_screens.is_empty() {
        let mut mask: u16 = 0;
        for screen in &args.fullscreen_screens {
            mask |= 1 << (screen - 1);
        }
        config.fullscreen_screens = mask;
    }
    if let Some(flip) = args.fullscreen_flip_left {
        config.fullscreen_flip_left = flip;
    }
    if let Some(flop) = args.fullscreen_flop_left {
        config.fullscreen_flop_left = flop;
    }
    if let Some(flip) = args.fullscreen_flip_right {
        config.fullscreen_flip_right = flip;
    }
    if let Some(flop) = args.fullscreen_flop_right {
        config.fullscreen_flop_right = flop;
    }

    config.zoom = args.zoom;
    config.center = args.center;
    config.subtitle = SubtitleParams {
        encoding: args.subtitle_encoding.clone(),
        font: args.subtitle_font.clone(),
        size: args.subtitle_size,
        scale: args.subtitle_scale,
        color: args.subtitle_color,
        parallax: args.subtitle_parallax,
    };
    config.parallax = args.parallax;
    if let Some(crosstalk) = args.crosstalk {
        config.crosstalk = crosstalk;
    }
    config.ghostbust = args.ghostbust;
    config.benchmark = args.benchmark;
    config.loop_media = args.loop_media;

    Ok(Resolution {
        config,
        cluster,
        log_level_explicit: args.log_level.is_some(),
        cluster_options: ClusterOptions {
            server: args.eq_server.clone(),
            config: args.eq_config.clone(),
            listen: args.eq_listen.clone(),
            log_file: args.eq_logfile.clone(),
            render_client: args.eq_render_client.clone(),
        },
    })
}

/// Cluster output does not pick a rendering mode; the override is forced to
/// the neutral mono-left placeholder, with only the explicit swap applied.
fn neutral_mode(swap_eyes: bool) -> ModeOverride {
    ModeOverride {
        mode: StereoMode::MonoLeft,
        swap: swap_eyes,
    }
}
