//! Terminal output for the CLI.
//!
//! Status lines are styled and go to stderr. Command results (envelopes,
//! tokens, hashes) are printed plain on stdout so they can be piped into
//! files or other tools.

use console::style;

/// Print a green status line: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red failure line: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow caution line: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a command result on stdout, unstyled and newline-terminated.
pub fn value(msg: &str) {
    println!("{msg}");
}
