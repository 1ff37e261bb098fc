//! Error bookkeeping derived from error correction decoding.

/// Corrected-error count above which a frame's parameters are considered
/// untrustworthy and the previous frame is repeated.
pub const REPEAT_THRESHOLD: usize = 3;

/// Consecutive repeats beyond which the decoder mutes instead.
pub const MAX_REPEATS: u32 = 3;

/// Amplitude scale applied per consecutive repeated frame.
pub const REPEAT_DECAY: f32 = 0.5;

/// Values derived from error correction decoding.
#[derive(Copy, Clone, Debug)]
pub struct Errors {
    /// Total number of errors corrected in the current frame, ϵ<sub>T</sub>.
    pub total: usize,
    /// Error rate tracking term, ϵ<sub>R</sub>.
    pub rate: f32,
}

impl Errors {
    /// Create a new `Errors` from the errors corrected in the current frame
    /// and the previous frame's ϵ<sub>R</sub> value.
    pub fn new(total: usize, prev_rate: f32) -> Errors {
        Errors {
            total,
            rate: 0.95 * prev_rate + 0.000365 * total as f32,
        }
    }

    /// Whether the frame is too corrupted to synthesize from.
    pub fn should_repeat(&self) -> bool {
        self.total > REPEAT_THRESHOLD
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_errors() {
        let e = Errors::new(28, 0.5);

        assert_eq!(e.total, 28);
        assert!((e.rate - 0.48522).abs() < 0.00001);
        assert!(e.should_repeat());
    }

    #[test]
    fn test_repeat_threshold() {
        assert!(!Errors::new(0, 0.0).should_repeat());
        assert!(!Errors::new(3, 0.0).should_repeat());
        assert!(Errors::new(4, 0.0).should_repeat());
        assert!(Errors::new(6, 0.0).should_repeat());
    }

    #[test]
    fn test_rate_decays() {
        let mut rate = 0.2;

        for _ in 0..100 {
            rate = Errors::new(0, rate).rate;
        }

        assert!(rate < 0.002);
    }
}
