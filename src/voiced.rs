//! Voiced synthesis: one continuous-phase oscillator per voiced harmonic.

use std::f32::consts::TAU;

use arrayvec::ArrayVec;

use crate::consts::{MAX_HARMONICS, SAMPLES_PER_FRAME};
use crate::params::BaseParams;
use crate::prev::PrevFrame;
use crate::spectral::Spectrals;
use crate::voicing::VoiceDecisions;

/// Per-harmonic phase accumulators carried across frames.
///
/// Harmonic l's oscillator runs at lω<sub>0</sub>; its accumulator holds the
/// phase at sample 0 of the current frame, which keeps the waveform
/// continuous across frame boundaries.
#[derive(Clone)]
pub struct Phase([f32; MAX_HARMONICS]);

impl Phase {
    /// Phase of harmonic l at the start of the current frame.
    pub fn get(&self, l: usize) -> f32 {
        self.0[l - 1]
    }

    /// Step every accumulator over one frame of the given fundamental,
    /// wrapping each into [0, 2π).
    pub fn advance(&mut self, params: &BaseParams) {
        let step = params.angular() * SAMPLES_PER_FRAME as f32;

        for (i, phi) in self.0.iter_mut().enumerate() {
            *phi = (*phi + step * (i + 1) as f32).rem_euclid(TAU);
        }
    }
}

impl Default for Phase {
    fn default() -> Phase {
        Phase([0.0; MAX_HARMONICS])
    }
}

/// Synthesizer for the voiced part of one frame.
pub struct Voiced<'a> {
    phase: &'a Phase,
    /// Fundamental ω<sub>0</sub> in radians per sample.
    fundamental: f32,
    /// Harmonic number and its start/end log2 amplitude.
    harmonics: ArrayVec<(usize, f32, f32), MAX_HARMONICS>,
}

impl<'a> Voiced<'a> {
    pub fn new(
        params: &BaseParams,
        prev: &PrevFrame,
        spectrals: &Spectrals,
        voice: &VoiceDecisions,
        phase: &'a Phase,
    ) -> Voiced<'a> {
        // Amplitude ramps from the previous envelope at the matching
        // normalized frequency to the current envelope value.
        let scale = prev.params.harmonics as f32 / params.harmonics as f32;

        Voiced {
            phase,
            fundamental: params.angular(),
            harmonics: (1..=params.harmonics as usize)
                .filter(|&l| voice.is_voiced(l))
                .map(|l| {
                    (
                        l,
                        prev.spectrals.interpolate(scale * l as f32),
                        spectrals.get(l),
                    )
                })
                .collect(),
        }
    }

    /// Synthesize sample n of the frame, 0 ≤ n < 160.
    pub fn get(&self, n: usize) -> f32 {
        let t = n as f32 / SAMPLES_PER_FRAME as f32;

        self.harmonics
            .iter()
            .map(|&(l, start, end)| {
                let amp = ((1.0 - t) * start + t * end).exp2();

                amp * (self.phase.get(l) + self.fundamental * (l * n) as f32).cos()
            })
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coefs::Coefficients;
    use crate::fields::Fields;
    use crate::gain::Gains;

    #[test]
    fn test_advance_wraps() {
        let params = BaseParams::new(60);
        let mut phase = Phase::default();

        phase.advance(&params);

        for l in 1..=MAX_HARMONICS {
            let p = phase.get(l);
            assert!(p >= 0.0 && p < TAU);

            let expected = (params.angular() * (l * SAMPLES_PER_FRAME) as f32).rem_euclid(TAU);
            assert!((p - expected).abs() < 1e-2, "harmonic {}", l);
        }
    }

    #[test]
    fn test_unvoiced_frame_is_silent() {
        let params = BaseParams::new(60);
        let prev = PrevFrame::default();
        let fields = Fields::from_bits(0);
        let coefs = Coefficients::new(&fields, &params);
        let gains = Gains::new(8, 0.0);
        let spectrals = Spectrals::new(&coefs, &gains, &params, &prev);
        let voice = VoiceDecisions::all_unvoiced(&params);
        let phase = Phase::default();

        let v = Voiced::new(&params, &prev, &spectrals, &voice, &phase);

        for n in 0..SAMPLES_PER_FRAME {
            assert_eq!(v.get(n), 0.0);
        }
    }

    #[test]
    fn test_single_harmonic() {
        let params = BaseParams::new(0);
        let prev = PrevFrame::default();
        let fields = Fields::from_bits(0);
        let coefs = Coefficients::new(&fields, &params);
        let gains = Gains::new(0, 0.0);
        let spectrals = Spectrals::new(&coefs, &gains, &params, &prev);
        // Pattern 14 voices band 0 only, which holds just harmonic 1 at
        // this fundamental.
        let voice = VoiceDecisions::new(14, &params);
        let phase = Phase::default();

        assert!(voice.is_voiced(1));
        assert!(!voice.is_voiced(2));

        let v = Voiced::new(&params, &prev, &spectrals, &voice, &phase);

        // A single oscillator starting at phase 0 peaks at sample 0.
        let first = v.get(0);
        assert!(first > 0.0);

        for n in 1..SAMPLES_PER_FRAME {
            assert!(v.get(n).abs() <= first * 1.3);
        }

        // It crosses zero near a quarter period.
        let quarter = (0.25 / params.fundamental) as usize;
        assert!(v.get(quarter).abs() < first * 0.4);
    }
}
