//! Voiced/unvoiced decisions for each harmonic.

use crate::consts::NUM_BANDS;
use crate::params::BaseParams;
use crate::tables::VUV_TABLE;

/// Frequency band a harmonic falls in, 0..8.
///
/// Band edges are multiples of 500 Hz, so harmonic l of fundamental f lands
/// in band ⌊16lf⌋ (clamped at the top band).
pub fn band(l: usize, params: &BaseParams) -> usize {
    ((16.0 * l as f32 * params.fundamental) as usize).min(NUM_BANDS - 1)
}

/// Voiced/unvoiced decision for each harmonic of the frame.
#[derive(Copy, Clone, Debug)]
pub struct VoiceDecisions {
    /// Bit l − 1 set means harmonic l is voiced.
    voiced: u64,
    /// Number of harmonics, L.
    pub harmonics: u32,
}

impl VoiceDecisions {
    /// Expand the given band pattern symbol b<sub>1</sub> over the frame's
    /// harmonics.
    pub fn new(symbol: usize, params: &BaseParams) -> VoiceDecisions {
        let pattern = &VUV_TABLE[symbol.min(VUV_TABLE.len() - 1)];
        let mut voiced = 0;

        for l in 1..=params.harmonics as usize {
            if pattern[band(l, params)] == 1 {
                voiced |= 1 << (l - 1);
            }
        }

        VoiceDecisions {
            voiced,
            harmonics: params.harmonics,
        }
    }

    /// Mark every harmonic unvoiced, as silence frames and degenerate
    /// analysis do.
    pub fn all_unvoiced(params: &BaseParams) -> VoiceDecisions {
        VoiceDecisions {
            voiced: 0,
            harmonics: params.harmonics,
        }
    }

    /// Whether harmonic l (1-based) is voiced; harmonics past L are not.
    pub fn is_voiced(&self, l: usize) -> bool {
        l >= 1 && l <= self.harmonics as usize && self.voiced >> (l - 1) & 1 == 1
    }
}

impl Default for VoiceDecisions {
    fn default() -> VoiceDecisions {
        VoiceDecisions::all_unvoiced(&BaseParams::default())
    }
}

/// Quantize per-band voiced flags to the symbol of the nearest band pattern
/// in Hamming distance, ties to the lowest symbol.
pub fn quantize(bands: [bool; NUM_BANDS]) -> usize {
    VUV_TABLE
        .iter()
        .enumerate()
        .min_by_key(|(_, row)| {
            row.iter()
                .zip(bands.iter())
                .filter(|(&r, &b)| (r == 1) != b)
                .count()
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_mapping() {
        let p = BaseParams::new(0);
        assert_eq!(p.harmonics, 9);

        // f0 = 0.049971: bands 0,1,2,3,3,4,5,6,7.
        let expected = [0, 1, 2, 3, 3, 4, 5, 6, 7];

        for (l, &b) in expected.iter().enumerate() {
            assert_eq!(band(l + 1, &p), b);
        }
    }

    #[test]
    fn test_expand() {
        let p = BaseParams::new(0);
        // Pattern 4 voices bands 0..=5 only.
        let v = VoiceDecisions::new(4, &p);

        for l in 1..=7 {
            assert!(v.is_voiced(l));
        }

        assert!(!v.is_voiced(8));
        assert!(!v.is_voiced(9));
        assert!(!v.is_voiced(10));
        assert!(!v.is_voiced(0));
    }

    #[test]
    fn test_all_unvoiced() {
        let v = VoiceDecisions::all_unvoiced(&BaseParams::new(119));

        for l in 1..=56 {
            assert!(!v.is_voiced(l));
        }
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize([true; 8]), 0);
        assert_eq!(quantize([false; 8]), 16);
        assert_eq!(
            quantize([true, true, true, true, true, true, false, false]),
            4
        );
        assert_eq!(
            quantize([true, true, true, true, true, false, false, false]),
            9
        );
        // One band off every pattern picks the nearest.
        assert_eq!(
            quantize([false, true, true, true, true, true, false, false]),
            4
        );
    }

    #[test]
    fn test_symbol_clamp() {
        let p = BaseParams::new(0);
        let v = VoiceDecisions::new(100, &p);

        for l in 1..=9 {
            assert!(!v.is_voiced(l));
        }
    }
}
