//! Terminal error reporting for the command dispatch edge.
//!
//! Libraries and guards in this workspace return errors; rendering them
//! and terminating the process happens here and nowhere else.

use std::fmt::Write as _;

const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Print the error (and its cause chain) to stderr and exit non-zero.
pub fn exit_with(err: &anyhow::Error) -> ! {
    eprint!("{}", render(err));
    std::process::exit(1);
}

fn render(err: &anyhow::Error) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RED}{BOLD}error:{RESET} {err}");
    for cause in err.chain().skip(1) {
        let _ = writeln!(out, "  {DIM}caused by:{RESET} {cause}");
    }
    out
}
