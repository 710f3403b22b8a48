//! Colorized console output for the build command.
//!
//! Progress lines are blue, per-artifact success markers green, and
//! per-file failures yellow on stderr. The validate-toml command prints
//! uncolored output and does not go through this module.

const BLUE: &str = "\x1b[0;34m";
const GREEN: &str = "\x1b[0;32m";
const YELLOW: &str = "\x1b[0;33m";
const RESET: &str = "\x1b[0m";

/// Print a blue progress line.
pub fn info(msg: &str) {
    println!("{}{}{}", BLUE, msg, RESET);
}

/// Print a yellow notice line.
pub fn warn(msg: &str) {
    println!("{}{}{}", YELLOW, msg, RESET);
}

/// Print a green completion line.
pub fn success(msg: &str) {
    println!("{}{}{}", GREEN, msg, RESET);
}

/// Print a green checkmark for one written artifact.
pub fn artifact_ok(artifact: &str) {
    println!("  {}\u{2713}{} {}", GREEN, RESET, artifact);
}

/// Print a yellow cross for a source file that failed to process.
pub fn file_failed(file: &str, message: &str) {
    eprintln!(
        "  {}\u{2717} Error processing {}: {}{}",
        YELLOW, file, message, RESET
    );
}
