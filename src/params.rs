//! Fundamental frequency and harmonic count for a frame.

use crate::mode::Mode;
use crate::tables::{L_TABLE, W0_TABLE};

/// Largest pitch index that maps to a voice frame.
pub const MAX_PITCH_INDEX: usize = 119;

/// Pitch index used for the neutral state a fresh instance starts from.
const NEUTRAL_PITCH_INDEX: usize = 60;

#[derive(Copy, Clone, Debug)]
pub struct BaseParams {
    /// Fundamental frequency f<sub>0</sub> in cycles per sample.
    pub fundamental: f32,
    /// Number of harmonics, L.
    pub harmonics: u32,
}

impl BaseParams {
    /// Create frame parameters from the given pitch index, saturating past
    /// the end of the table.
    pub fn new(pitch: usize) -> BaseParams {
        let pitch = pitch.min(MAX_PITCH_INDEX);

        BaseParams {
            fundamental: W0_TABLE[pitch],
            harmonics: L_TABLE[pitch],
        }
    }

    /// Fixed parameters used by silence frames: a 250 Hz comfort-noise grid
    /// of 14 harmonics.
    pub fn silence() -> BaseParams {
        BaseParams {
            fundamental: 1.0 / 32.0,
            harmonics: 14,
        }
    }

    /// Fundamental angular frequency ω<sub>0</sub> in radians per sample.
    pub fn angular(&self) -> f32 {
        2.0 * std::f32::consts::PI * self.fundamental
    }
}

impl Default for BaseParams {
    fn default() -> BaseParams {
        BaseParams::new(NEUTRAL_PITCH_INDEX)
    }
}

/// What a frame's pitch symbol says the frame is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameClass {
    /// Ordinary voice frame with the given pitch index.
    Voice(usize),
    /// Comfort-noise frame: fixed silence parameters, all bands unvoiced.
    Silence,
    /// Tone frame; tone parameters live at the framing layer, not here.
    Tone,
    /// The transmitter flagged the frame unusable.
    Erasure,
}

impl FrameClass {
    /// Classify the given 7-bit pitch symbol under the given mode.
    pub fn new(pitch: usize, mode: Mode) -> FrameClass {
        if !mode.has_reserved_pitch() || pitch <= MAX_PITCH_INDEX {
            FrameClass::Voice(pitch.min(MAX_PITCH_INDEX))
        } else if pitch <= 123 {
            FrameClass::Erasure
        } else if pitch <= 125 {
            FrameClass::Silence
        } else {
            FrameClass::Tone
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params() {
        let p = BaseParams::new(0);
        assert!((p.fundamental - 0.049971).abs() < 1e-6);
        assert_eq!(p.harmonics, 9);

        let p = BaseParams::new(60);
        assert!((p.fundamental - 0.019983).abs() < 1e-6);
        assert_eq!(p.harmonics, 23);

        let p = BaseParams::new(119);
        assert!((p.fundamental - 0.008125).abs() < 1e-6);
        assert_eq!(p.harmonics, 56);
    }

    #[test]
    fn test_clamp() {
        let p = BaseParams::new(127);
        let last = BaseParams::new(119);

        assert!((p.fundamental - last.fundamental).abs() < 1e-9);
        assert_eq!(p.harmonics, last.harmonics);
    }

    #[test]
    fn test_table_monotone() {
        for pitch in 0..=MAX_PITCH_INDEX {
            let p = BaseParams::new(pitch);

            assert!((9..=56).contains(&p.harmonics));

            if pitch > 0 {
                let prev = BaseParams::new(pitch - 1);

                assert!(p.fundamental < prev.fundamental);
                assert!(p.harmonics >= prev.harmonics);
            }
        }
    }

    #[test]
    fn test_default() {
        let p = BaseParams::default();
        assert_eq!(p.harmonics, 23);
        assert!((p.angular() - 2.0 * std::f32::consts::PI * 0.019983).abs() < 1e-6);
    }

    #[test]
    fn test_silence_params() {
        let p = BaseParams::silence();
        assert!((p.fundamental - 0.03125).abs() < 1e-9);
        assert_eq!(p.harmonics, 14);
    }

    #[test]
    fn test_class() {
        assert_eq!(FrameClass::new(0, Mode::DmrAmbe), FrameClass::Voice(0));
        assert_eq!(FrameClass::new(119, Mode::DmrAmbe), FrameClass::Voice(119));
        assert_eq!(FrameClass::new(120, Mode::DmrAmbe), FrameClass::Erasure);
        assert_eq!(FrameClass::new(123, Mode::DmrAmbe), FrameClass::Erasure);
        assert_eq!(FrameClass::new(124, Mode::DmrAmbe), FrameClass::Silence);
        assert_eq!(FrameClass::new(125, Mode::DmrAmbe), FrameClass::Silence);
        assert_eq!(FrameClass::new(126, Mode::DmrAmbe), FrameClass::Tone);
        assert_eq!(FrameClass::new(127, Mode::DmrAmbe), FrameClass::Tone);

        assert_eq!(FrameClass::new(127, Mode::Imbe), FrameClass::Voice(119));
        assert_eq!(FrameClass::new(119, Mode::Imbe), FrameClass::Voice(119));
        assert_eq!(FrameClass::new(60, Mode::Imbe), FrameClass::Voice(60));
    }
}
