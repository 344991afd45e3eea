//! The `hdlgen` binary: launches the form interface.

use std::process;

fn main() {
    if let Err(err) = hdlgen_tui::run_tui() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
