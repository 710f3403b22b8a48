//! Exit code constants for the promptpack CLI.
//!
//! The tool distinguishes only success and failure:
//! - 0: Success (including the "no source files" case)
//! - 1: Fatal setup error, per-file validation/write error, or TOML
//!   re-validation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any error: missing source directory, per-file validation or write
/// failure, or a failed TOML re-validation pass.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
