//! unveil CLI entry point
//!
//! Runs the pipeline against a buffered stdout. Errors are shown on stderr
//! with context and suggestions, and the process exits with status 1.

use std::io::{self, BufWriter};

use unveil::cli;
use unveil::core::error::user_friendly_error;

fn main() {
    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = cli::run(std::env::args_os().skip(1), &mut out) {
        // discard anything buffered so a failed run prints nothing on stdout
        let _ = out.into_parts();
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}
