//! Error types for the codec.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Usage errors reported by the codec.
///
/// Transmission errors are not errors in this sense: corrupted codewords
/// still decode (through correction, repeat, or mute) and report a count.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Codeword buffer length doesn't match the mode.
    #[error("invalid codeword length: expected {expected} bytes, got {actual}")]
    WrongCodewordLen {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// PCM buffer length doesn't match the frame size.
    #[error("invalid PCM length: expected {expected} samples, got {actual}")]
    WrongPcmLen {
        /// Expected length in samples
        expected: usize,
        /// Actual length in samples
        actual: usize,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::WrongCodewordLen {
            expected: 9,
            actual: 11,
        };
        assert_eq!(
            e.to_string(),
            "invalid codeword length: expected 9 bytes, got 11"
        );

        let e = Error::WrongPcmLen {
            expected: 160,
            actual: 0,
        };
        assert_eq!(e.to_string(), "invalid PCM length: expected 160 samples, got 0");
    }
}
