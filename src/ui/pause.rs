//! Wait-for-Enter before exit, so a double-clicked console window stays open

use std::io::{self, BufRead, Write};

use pongpack::config::PauseMode;
use pongpack::Platform;

/// Decide whether to pause before exiting.
///
/// `--no-pause` wins over everything. Otherwise the configured mode applies,
/// with `auto` meaning the platform default. Nobody can press Enter when stdin
/// is not a terminal, so that case never pauses.
pub fn should_pause(no_pause: bool, mode: PauseMode, platform: &Platform, stdin_tty: bool) -> bool {
    !no_pause && stdin_tty && mode.resolve(platform.pause_on_exit)
}

pub fn wait_for_enter() {
    let mut err = io::stderr();
    let _ = write!(err, "Press Enter to exit...");
    let _ = err.flush();

    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
