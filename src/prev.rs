//! Decoded state carried from one frame into the next.

use crate::params::BaseParams;
use crate::spectral::Spectrals;
use crate::voiced::Phase;
use crate::voicing::VoiceDecisions;

pub struct PrevFrame {
    pub params: BaseParams,
    pub spectrals: Spectrals,
    pub voice: VoiceDecisions,
    /// Decoded gain γ, the differential base for the next frame.
    pub gamma: f32,
    /// Error rate tracking term ϵ<sub>R</sub>.
    pub err_rate: f32,
    /// Voiced phase accumulators.
    pub phase: Phase,
}

impl Default for PrevFrame {
    /// The neutral state a fresh instance predicts its first frame from: a
    /// flat unit envelope, everything unvoiced, zero gain and phases.
    fn default() -> PrevFrame {
        PrevFrame {
            params: BaseParams::default(),
            spectrals: Spectrals::default(),
            voice: VoiceDecisions::default(),
            gamma: 0.0,
            err_rate: 0.0,
            phase: Phase::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_neutral() {
        let prev = PrevFrame::default();

        assert_eq!(prev.params.harmonics, 23);
        assert_eq!(prev.gamma, 0.0);
        assert_eq!(prev.err_rate, 0.0);

        for l in 1..=56 {
            assert_eq!(prev.spectrals.get(l), 0.0);
            assert!(!prev.voice.is_voiced(l));
            assert_eq!(prev.phase.get(l), 0.0);
        }
    }
}
