//! finops-dashboard entry point
//!
//! Parses arguments and dispatches through `cli::run`. Errors are reported
//! as a JSON line on stdout plus a plain line on stderr, then exit 1.

use finops_dashboard::cli;

fn main() {
    if let Err(e) = cli::run() {
        let _ = cli::write_error(e.code_str(), e.message());
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
