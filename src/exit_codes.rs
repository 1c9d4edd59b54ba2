//! Exit code constants for the revdiff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or invalid config)
//! - 2: Invalid revision (the algebra returned its invalid sentinel)
//! - 3: I/O failure (input file or stdin could not be read)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid configuration file.
pub const USER_ERROR: i32 = 1;

/// A revision operation had no valid result for its input.
pub const INVALID_REVISION: i32 = 2;

/// Reading diff input failed.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, INVALID_REVISION, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
