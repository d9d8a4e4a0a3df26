//! Command-line interface definitions.
//!
//! This module contains the clap-powered option surface (args + value
//! parsers). It intentionally holds no resolution logic; the resolver
//! consumes the parsed values.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::Parser;

use stereoview_types::{LOG_LEVEL_NAMES, STEREO_LAYOUT_NAMES, STEREO_MODE_NAMES};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_SHA"),
    ", ",
    env!("BUILD_DATE"),
    ")"
);

const AFTER_HELP: &str = "\
Interactive control:
  ESC                 Leave fullscreen mode, or quit
  q                   Quit
  p or SPACE          Pause / unpause
  f                   Toggle fullscreen
  c                   Center window
  e                   Swap left/right eye
  v, a, s             Cycle through video/audio/subtitle streams
  [, ]                Adjust parallax
  (, )                Adjust ghostbusting
  <, >                Adjust zoom for wide videos
  left, right         Seek 10 seconds backward / forward
  up, down            Seek 1 minute backward / forward
  page up, page down  Seek 10 minutes backward / forward";

#[derive(Parser, Debug)]
#[command(name = "stereoview", version = VERSION, about = "Play stereoscopic (3D) video",
          after_help = AFTER_HELP)]
pub struct Args {
    /// Files or URLs to play, or a single capture device path
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Do not use the GUI, just show a plain window
    #[arg(short = 'n', long)]
    pub no_gui: bool,

    /// Append all log messages to the given file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Set log level (debug/info/warning/error/quiet)
    #[arg(short = 'L', long, value_name = "LEVEL",
          value_parser = PossibleValuesParser::new(LOG_LEVEL_NAMES))]
    pub log_level: Option<String>,

    /// Type of input device: default, firewire, x11
    #[arg(long, value_name = "TYPE")]
    pub device_type: Option<String>,

    /// Request frame size WxH from the input device
    #[arg(long, value_name = "WxH", value_parser = parse_frame_size)]
    pub device_frame_size: Option<(u32, u32)>,

    /// Request frame rate N/D from the input device
    #[arg(long, value_name = "N/D", value_parser = parse_frame_rate)]
    pub device_frame_rate: Option<(u32, u32)>,

    /// Use the given LIRC configuration file (repeatable)
    #[arg(long, value_name = "FILE")]
    pub lirc_config: Vec<PathBuf>,

    /// Select video stream (1-n, depending on input)
    #[arg(short = 'v', long, value_name = "STREAM", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..=999))]
    pub video: u32,

    /// Select audio stream (1-n, depending on input)
    #[arg(short = 'a', long, value_name = "STREAM", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..=999))]
    pub audio: u32,

    /// Select subtitle stream (0-n, depending on input)
    #[arg(short = 's', long, value_name = "STREAM", default_value_t = 0,
          value_parser = clap::value_parser!(u32).range(0..=999))]
    pub subtitle: u32,

    /// Select input layout (default: autodetect from media)
    #[arg(short = 'i', long = "input", value_name = "TYPE",
          value_parser = PossibleValuesParser::new(STEREO_LAYOUT_NAMES))]
    pub input: Option<String>,

    /// Select output mode (default: backend choice)
    #[arg(short = 'o', long = "output", value_name = "TYPE",
          value_parser = PossibleValuesParser::new(STEREO_MODE_NAMES))]
    pub output: Option<String>,

    /// Swap left/right view
    #[arg(short = 'S', long)]
    pub swap_eyes: bool,

    /// Fullscreen
    #[arg(short = 'f', long)]
    pub fullscreen: bool,

    /// Use the listed screens in fullscreen mode (numbers start with 1;
    /// the default is the primary screen)
    #[arg(long, value_name = "S0[,S1,...]", value_delimiter = ',',
          value_parser = clap::value_parser!(u8).range(1..=16))]
    pub fullscreen_screens: Vec<u8>,

    /// Flip left view vertically when fullscreen
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true,
          default_missing_value = "true")]
    pub fullscreen_flip_left: Option<bool>,

    /// Flop left view horizontally when fullscreen
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true,
          default_missing_value = "true")]
    pub fullscreen_flop_left: Option<bool>,

    /// Flip right view vertically when fullscreen
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true,
          default_missing_value = "true")]
    pub fullscreen_flip_right: Option<bool>,

    /// Flop right view horizontally when fullscreen
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true,
          default_missing_value = "true")]
    pub fullscreen_flop_right: Option<bool>,

    /// Set zoom for wide videos (0=off to 1=full)
    #[arg(short = 'z', long, value_name = "Z", default_value_t = 0.0,
          value_parser = parse_unit)]
    pub zoom: f32,

    /// Center window on screen
    #[arg(short = 'c', long)]
    pub center: bool,

    /// Set subtitle encoding
    #[arg(long, value_name = "ENC")]
    pub subtitle_encoding: Option<String>,

    /// Set subtitle font name
    #[arg(long, value_name = "FONT")]
    pub subtitle_font: Option<String>,

    /// Set subtitle font size
    #[arg(long, value_name = "N",
          value_parser = clap::value_parser!(u32).range(1..=999))]
    pub subtitle_size: Option<u32>,

    /// Set subtitle scale factor
    #[arg(long, value_name = "S", value_parser = parse_non_negative)]
    pub subtitle_scale: Option<f32>,

    /// Set subtitle color, in [AA]RRGGBB format
    #[arg(long, value_name = "COLOR", value_parser = parse_color)]
    pub subtitle_color: Option<u32>,

    /// Subtitle parallax adjustment (-1 to +1)
    #[arg(long, value_name = "VAL", default_value_t = 0.0,
          allow_negative_numbers = true, value_parser = parse_signed_unit)]
    pub subtitle_parallax: f32,

    /// Parallax adjustment (-1 to +1)
    #[arg(short = 'P', long, value_name = "VAL", default_value_t = 0.0,
          allow_negative_numbers = true, value_parser = parse_signed_unit)]
    pub parallax: f32,

    /// Crosstalk leak level (0 to 1); comma-separated R,G,B values
    #[arg(short = 'C', long, value_name = "R,G,B", value_parser = parse_crosstalk)]
    pub crosstalk: Option<[f32; 3]>,

    /// Amount of ghostbusting to apply (0 to 1)
    #[arg(short = 'G', long, value_name = "VAL", default_value_t = 0.0,
          value_parser = parse_unit)]
    pub ghostbust: f32,

    /// Benchmark mode (no audio, show fps)
    #[arg(short = 'b', long)]
    pub benchmark: bool,

    /// Loop the input media
    #[arg(short = 'l', long = "loop")]
    pub loop_media: bool,

    /// Cluster server to connect to
    #[arg(long, value_name = "HOST")]
    pub eq_server: Option<String>,

    /// Cluster configuration file
    #[arg(long, value_name = "FILE")]
    pub eq_config: Option<String>,

    /// Cluster listen address
    #[arg(long, value_name = "ADDR")]
    pub eq_listen: Option<String>,

    /// Cluster runtime log file
    #[arg(long, value_name = "FILE")]
    pub eq_logfile: Option<String>,

    /// Cluster render client executable
    #[arg(long, value_name = "PROG")]
    pub eq_render_client: Option<String>,
}

fn parse_frame_size(s: &str) -> Result<(u32, u32), String> {
    let (width, height) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let width: u32 = width.parse().map_err(|_| format!("bad width '{width}'"))?;
    let height: u32 = height
        .parse()
        .map_err(|_| format!("bad height '{height}'"))?;
    if width == 0 || height == 0 {
        return Err("frame size components must be positive".to_string());
    }
    Ok((width, height))
}

fn parse_frame_rate(s: &str) -> Result<(u32, u32), String> {
    let (num, den) = s
        .split_once('/')
        .ok_or_else(|| format!("expected N/D, got '{s}'"))?;
    let num: u32 = num.parse().map_err(|_| format!("bad numerator '{num}'"))?;
    let den: u32 = den.parse().map_err(|_| format!("bad denominator '{den}'"))?;
    if num == 0 || den == 0 {
        return Err("frame rate components must be positive".to_string());
    }
    Ok((num, den))
}

fn parse_unit(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("bad value '{s}'"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{value} is not in 0..1"));
    }
    Ok(value)
}

fn parse_signed_unit(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("bad value '{s}'"))?;
    if !(-1.0..=1.0).contains(&value) {
        return Err(format!("{value} is not in -1..1"));
    }
    Ok(value)
}

fn parse_non_negative(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("bad value '{s}'"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{value} is not a non-negative factor"));
    }
    Ok(value)
}

fn parse_crosstalk(s: &str) -> Result<[f32; 3], String> {
    let mut parts = s.split(',');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(r), Some(g), Some(b), None) => {
            Ok([parse_unit(r)?, parse_unit(g)?, parse_unit(b)?])
        }
        _ => Err(format!("expected R,G,B, got '{s}'")),
    }
}

fn parse_color(s: &str) -> Result<u32, String> {
    if !matches!(s.len(), 6 | 8) || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected [AA]RRGGBB, got '{s}'"));
    }
    u32::from_str_radix(s, 16).map_err(|_| format!("bad color '{s}'"))
}

/// Test helper: parse argv fragments appended after the program name.
#[cfg(test)]
pub(crate) fn parse(extra: &[&str]) -> Args {
    let argv = std::iter::once("stereoview").chain(extra.iter().copied());
    Args::try_parse_from(argv).expect("argv parses")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_needs_two_positive_components() {
        assert_eq!(parse_frame_size("1920x1080"), Ok((1920, 1080)));
        assert!(parse_frame_size("1920").is_err());
        assert!(parse_frame_size("0x1080").is_err());
    }

    #[test]
    fn frame_rate_needs_a_positive_fraction() {
        assert_eq!(parse_frame_rate("30000/1001"), Ok((30000, 1001)));
        assert!(parse_frame_rate("25").is_err());
        assert!(parse_frame_rate("25/0").is_err());
    }

    #[test]
    fn crosstalk_takes_an_rgb_triple() {
        let args = parse(&["--crosstalk", "0.1,0.2,0.3"]);
        assert_eq!(args.crosstalk, Some([0.1, 0.2, 0.3]));
        assert!(parse_crosstalk("0.1,0.2").is_err());
        assert!(parse_crosstalk("1.5,0,0").is_err());
    }

    #[test]
    fn subtitle_color_accepts_optional_alpha() {
        assert_eq!(parse_color("ff0000"), Ok(0x00ff_0000));
        assert_eq!(parse_color("80ff0000"), Ok(0x80ff_0000));
        assert!(parse_color("ff00").is_err());
        assert!(parse_color("not-hex").is_err());
    }

    #[test]
    fn flip_flags_are_tri_state() {
        assert_eq!(parse(&[]).fullscreen_flip_left, None);
        assert_eq!(
            parse(&["--fullscreen-flip-left"]).fullscreen_flip_left,
            Some(true)
        );
        assert_eq!(
            parse(&["--fullscreen-flip-left=false"]).fullscreen_flip_left,
            Some(false)
        );
    }

    #[test]
    fn screens_list_is_comma_separated_and_bounded() {
        assert_eq!(parse(&["--fullscreen-screens", "1,3"]).fullscreen_screens, vec![1, 3]);
        assert!(Args::try_parse_from(["stereoview", "--fullscreen-screens", "17"]).is_err());
    }

    #[test]
    fn mode_vocabularies_are_enforced() {
        assert!(Args::try_parse_from(["stereoview", "--output", "sideways"]).is_err());
        assert_eq!(parse(&["--output", "equalizer"]).output.as_deref(), Some("equalizer"));
        assert!(Args::try_parse_from(["stereoview", "--input", "mono-left"]).is_err());
        assert_eq!(parse(&["-i", "right-left"]).input.as_deref(), Some("right-left"));
    }

    #[test]
    fn stream_selectors_are_one_based() {
        let args = parse(&[]);
        assert_eq!((args.video, args.audio, args.subtitle), (1, 1, 0));
        assert!(Args::try_parse_from(["stereoview", "--video", "0"]).is_err());
    }
}
