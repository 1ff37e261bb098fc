//! Spectral amplitudes.

use arrayvec::ArrayVec;

use crate::coefs::Coefficients;
use crate::consts::MAX_HARMONICS;
use crate::gain::Gains;
use crate::params::BaseParams;
use crate::prev::PrevFrame;

/// Weight of the previous frame's envelope in the current one.
pub const PREDICTOR: f32 = 0.65;

/// Log2 spectral amplitudes log<sub>2</sub> M<sub>l</sub>, 1 ≤ l ≤ L, the
/// spectral envelope of the voiced/unvoiced signal spectrum.
#[derive(Clone, Debug)]
pub struct Spectrals(ArrayVec<f32, MAX_HARMONICS>);

impl Spectrals {
    /// Create a new `Spectrals` from the transmitted residual T<sub>l</sub>,
    /// decoded gain, and current/previous frame parameters.
    pub fn new(
        coefs: &Coefficients,
        gains: &Gains,
        params: &BaseParams,
        prev: &PrevFrame,
    ) -> Spectrals {
        // Map harmonic l of this frame onto the previous frame's envelope at
        // the matching normalized frequency.
        let scale = prev.params.harmonics as f32 / params.harmonics as f32;

        let harmonics = params.harmonics as usize;

        // Mean of the interpolated prediction over the frame.
        let sum = (1..=harmonics)
            .map(|l| prev.spectrals.interpolate(scale * l as f32))
            .sum::<f32>()
            / harmonics as f32;

        // The residual's own mean is discarded so that gamma alone sets the
        // frame level.
        let base = gains.gamma - 0.5 * (params.harmonics as f32).log2() - coefs.mean();

        Spectrals(
            (1..=harmonics)
                .map(|l| {
                    let pred = prev.spectrals.interpolate(scale * l as f32);

                    coefs.get(l) + PREDICTOR * (pred - sum) + base
                })
                .collect(),
        )
    }

    /// Retrieve log<sub>2</sub> M<sub>l</sub> for the given l.
    ///
    /// Index 0 reads the first amplitude and indices past L extend with the
    /// last, so prediction against a frame with fewer harmonics stays
    /// defined.
    pub fn get(&self, l: usize) -> f32 {
        if l == 0 {
            self.0[0]
        } else if l > self.0.len() {
            *self.0.last().unwrap()
        } else {
            self.0[l - 1]
        }
    }

    /// Linear amplitude M<sub>l</sub>.
    pub fn amplitude(&self, l: usize) -> f32 {
        self.get(l).exp2()
    }

    /// Evaluate the envelope between harmonics by linear interpolation in
    /// the log2 domain.
    pub fn interpolate(&self, k: f32) -> f32 {
        let frac = k.fract();
        let whole = k.trunc() as usize;

        (1.0 - frac) * self.get(whole) + frac * self.get(whole + 1)
    }

    /// Number of harmonics in this envelope.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Copy of the envelope with every amplitude scaled by the given factor.
    pub fn scaled(&self, factor: f32) -> Spectrals {
        let offset = factor.log2();

        Spectrals(self.0.iter().map(|&s| s + offset).collect())
    }
}

impl Default for Spectrals {
    /// Construct the flat unit envelope.
    fn default() -> Spectrals {
        Spectrals((0..MAX_HARMONICS).map(|_| 0.0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Fields;

    fn build(fields: &Fields, params: &BaseParams, prev: &PrevFrame) -> (Spectrals, Gains) {
        let coefs = Coefficients::new(fields, params);
        let gains = Gains::new(fields.gain as usize, prev.gamma);

        (Spectrals::new(&coefs, &gains, params, prev), gains)
    }

    #[test]
    fn test_gamma_sets_level() {
        // Whatever the residual, the mean log2 amplitude must come out as
        // gamma - log2(L)/2.
        let params = BaseParams::new(60);
        let prev = PrevFrame::default();
        let fields = Fields {
            pitch: 60,
            voicing: 0,
            gain: 15,
            prba24: 431,
            prba58: 101,
            hoc: [7, 3, 9, 2],
        };

        let (s, g) = build(&fields, &params, &prev);

        assert_eq!(s.len(), 23);

        let mean = (1..=23).map(|l| s.get(l)).sum::<f32>() / 23.0;
        let expected = g.gamma - 0.5 * (23.0f32).log2();

        assert!((mean - expected).abs() < 1e-4);
    }

    #[test]
    fn test_level_accumulates() {
        // Decoding the same fields twice compounds the differential gain.
        let params = BaseParams::new(60);
        let mut prev = PrevFrame::default();
        let fields = Fields {
            pitch: 60,
            voicing: 0,
            gain: 15,
            prba24: 0,
            prba58: 0,
            hoc: [0; 4],
        };

        let (s1, g1) = build(&fields, &params, &prev);
        prev.spectrals = s1;
        prev.gamma = g1.gamma;

        let (s2, g2) = build(&fields, &params, &prev);

        assert!((g2.gamma - 1.5 * g1.gamma).abs() < 1e-5);

        let mean = (1..=23).map(|l| s2.get(l)).sum::<f32>() / 23.0;
        assert!((mean - (g2.gamma - 0.5 * (23.0f32).log2())).abs() < 1e-4);
    }

    #[test]
    fn test_get_edges() {
        let params = BaseParams::new(0);
        let prev = PrevFrame::default();
        let fields = Fields::from_bits(0x0123_4567_89AB);

        let (s, _) = build(&fields, &params, &prev);

        assert_eq!(s.len(), 9);
        assert!((s.get(0) - s.get(1)).abs() < 1e-9);
        assert!((s.get(10) - s.get(9)).abs() < 1e-9);
        assert!((s.get(56) - s.get(9)).abs() < 1e-9);
    }

    #[test]
    fn test_interpolate() {
        let params = BaseParams::new(0);
        let prev = PrevFrame::default();
        let fields = Fields::from_bits(0);

        let (s, _) = build(&fields, &params, &prev);

        let mid = s.interpolate(3.5);
        assert!((mid - 0.5 * (s.get(3) + s.get(4))).abs() < 1e-6);

        assert!((s.interpolate(2.0) - s.get(2)).abs() < 1e-9);
    }

    #[test]
    fn test_scaled() {
        let params = BaseParams::new(60);
        let prev = PrevFrame::default();
        let fields = Fields::from_bits(0x0123_4567_89AB);

        let (s, _) = build(&fields, &params, &prev);
        let half = s.scaled(0.5);

        assert_eq!(half.len(), s.len());

        for l in 1..=s.len() {
            assert!((half.amplitude(l) - 0.5 * s.amplitude(l)).abs() < 1e-4);
        }
    }
}
