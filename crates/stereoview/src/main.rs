//! stereoview — a stereoscopic ("3D") video player.
//!
//! ## Startup path
//! 1. **Parse**: clap turns argv into typed, range/enum-validated values.
//! 2. **Resolve**: the resolver folds them into one `PlaybackConfig`.
//! 3. **Select**: a pure decision picks the backend (basic, GUI, or cluster)
//!    and applies backend-forced overrides.
//! 4. **Drive**: the lifecycle driver runs the backend through
//!    open/run/close with guaranteed teardown.
//!
//! All failures surface as a single stderr line and exit status 1.

mod cli;
mod logging;
mod resolve;
mod runtime;
mod select;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stereoview: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    let resolution = resolve::resolve(args)?;
    let selection = select::select(resolution, !args.no_gui, select::Environment::probe())?;

    let _log_guard = logging::init(selection.config.log_level, args.log_file.as_deref())?;
    if !args.lirc_config.is_empty() {
        tracing::warn!("this build does not include LIRC support");
    }
    let _ = ctrlc::set_handler(|| std::process::exit(130));

    runtime::run_session(selection)
}
