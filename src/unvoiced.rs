//! Unvoiced spectrum synthesis.
//!
//! Each unvoiced harmonic band [l − 1/2, l + 1/2]ω<sub>0</sub> is filled
//! with four oscillators spread evenly across it, each carrying a random
//! phase drawn once per frame. Running each at half the band amplitude makes
//! the expected energy of the incoherent sum equal that of a single
//! full-amplitude sinusoid, so unvoiced bands sit at the same envelope level
//! as voiced ones.

use arrayvec::ArrayVec;

use crate::consts::{MAX_HARMONICS, SAMPLES_PER_FRAME};
use crate::noise::Noise;
use crate::params::BaseParams;
use crate::prev::PrevFrame;
use crate::spectral::Spectrals;
use crate::voicing::VoiceDecisions;

/// Oscillators per unvoiced band.
const SUB_OSCILLATORS: usize = 4;

/// One unvoiced band's oscillator bank.
struct Band {
    /// Harmonic number.
    l: usize,
    /// Log2 amplitude at frame start.
    start: f32,
    /// Log2 amplitude at frame end.
    end: f32,
    /// Starting phase of each oscillator.
    phases: [f32; SUB_OSCILLATORS],
}

/// Synthesizer for the unvoiced part of one frame.
pub struct Unvoiced {
    /// Fundamental ω<sub>0</sub> in radians per sample.
    fundamental: f32,
    bands: ArrayVec<Band, MAX_HARMONICS>,
}

impl Unvoiced {
    pub fn new(
        params: &BaseParams,
        prev: &PrevFrame,
        spectrals: &Spectrals,
        voice: &VoiceDecisions,
        noise: &mut Noise,
    ) -> Unvoiced {
        let scale = prev.params.harmonics as f32 / params.harmonics as f32;

        Unvoiced {
            fundamental: params.angular(),
            bands: (1..=params.harmonics as usize)
                .filter(|&l| !voice.is_voiced(l))
                .map(|l| {
                    let mut phases = [0.0; SUB_OSCILLATORS];

                    for p in phases.iter_mut() {
                        *p = noise.next_phase();
                    }

                    Band {
                        l,
                        start: prev.spectrals.interpolate(scale * l as f32),
                        end: spectrals.get(l),
                        phases,
                    }
                })
                .collect(),
        }
    }

    /// Synthesize sample n of the frame, 0 ≤ n < 160.
    pub fn get(&self, n: usize) -> f32 {
        let t = n as f32 / SAMPLES_PER_FRAME as f32;

        self.bands
            .iter()
            .map(|band| {
                let amp = 0.5 * ((1.0 - t) * band.start + t * band.end).exp2();

                band.phases
                    .iter()
                    .enumerate()
                    .map(|(i, &phase)| {
                        // Center frequencies at offsets -3/8, -1/8, 1/8, 3/8
                        // of the harmonic spacing.
                        let offset = (i as f32 + 0.5) / SUB_OSCILLATORS as f32 - 0.5;
                        let freq = self.fundamental * (band.l as f32 + offset);

                        amp * (freq * n as f32 + phase).cos()
                    })
                    .sum::<f32>()
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

    fn flat_envelope(params: &BaseParams, prev: &PrevFrame) -> Spectrals {
        // Gain symbol 2 with flat history lands the mean log2 amplitude at
        // roughly 0.298 - log2(L)/2.
        let fields = Fields::from_bits(0);
        let coefs = Coefficients::new(&fields, params);
        let gains = Gains::new(2, 0.0);

        Spectrals::new(&coefs, &gains, params, prev)
    }

    #[test]
    fn test_all_voiced_is_silent() {
        let params = BaseParams::new(60);
        let prev = PrevFrame::default();
        let spectrals = flat_envelope(&params, &prev);
        let voice = VoiceDecisions::new(0, &params);
        let mut noise = Noise::new(99);

        let u = Unvoiced::new(&params, &prev, &spectrals, &voice, &mut noise);

        for n in 0..SAMPLES_PER_FRAME {
            assert_eq!(u.get(n), 0.0);
        }
    }

    #[test]
    fn test_deterministic() {
        let params = BaseParams::new(60);
        let prev = PrevFrame::default();
        let spectrals = flat_envelope(&params, &prev);
        let voice = VoiceDecisions::all_unvoiced(&params);

        let mut n1 = Noise::new(0xBEEF);
        let mut n2 = Noise::new(0xBEEF);

        let a = Unvoiced::new(&params, &prev, &spectrals, &voice, &mut n1);
        let b = Unvoiced::new(&params, &prev, &spectrals, &voice, &mut n2);

        for n in 0..SAMPLES_PER_FRAME {
            assert_eq!(a.get(n), b.get(n));
        }
    }

    #[test]
    fn test_energy_scale() {
        let params = BaseParams::new(60);
        let prev = PrevFrame::default();
        let spectrals = flat_envelope(&params, &prev);
        let voice = VoiceDecisions::all_unvoiced(&params);
        let mut noise = Noise::new(7);

        let u = Unvoiced::new(&params, &prev, &spectrals, &voice, &mut noise);

        let power = (0..SAMPLES_PER_FRAME)
            .map(|n| u.get(n) * u.get(n))
            .sum::<f32>()
            / SAMPLES_PER_FRAME as f32;

        // Expected power is half the summed squared amplitudes; allow a
        // wide band around it since one frame of one seed is a small sample.
        let expected = 0.5
            * (1..=23)
                .map(|l| {
                    let a = (0.5 * (prev.spectrals.get(l) + spectrals.get(l))).exp2();
                    a * a
                })
                .sum::<f32>();

        assert!(power > expected * 0.2, "power {} vs {}", power, expected);
        assert!(power < expected * 5.0, "power {} vs {}", power, expected);
    }
}
