//! Voice frame decoding.

use tracing::{debug, trace};

use crate::coefs::Coefficients;
use crate::consts::SAMPLES_PER_FRAME;
use crate::error::{Error, Result};
use crate::errors::{Errors, MAX_REPEATS, REPEAT_DECAY};
use crate::fields::Fields;
use crate::frame;
use crate::gain::Gains;
use crate::mode::Mode;
use crate::noise::Noise;
use crate::params::{BaseParams, FrameClass};
use crate::prev::PrevFrame;
use crate::spectral::Spectrals;
use crate::unvoiced::Unvoiced;
use crate::voiced::Voiced;
use crate::voicing::VoiceDecisions;

/// Stateful decoder for one voice stream.
///
/// Frames lean on each other: gain is coded differentially, the spectral
/// envelope is predicted from the previous frame's, and voiced phase
/// accumulates across frame boundaries. Feed each stream its own decoder,
/// one codeword at a time, in order.
pub struct Decoder {
    mode: Mode,
    /// State carried into the next frame.
    prev: PrevFrame,
    /// Output scale applied after synthesis.
    gain_adjust: f32,
    /// Consecutive frames replaced by a repeat of the previous one.
    repeats: u32,
}

impl Decoder {
    /// Create a decoder for the given codeword format.
    pub fn new(mode: Mode) -> Decoder {
        Decoder {
            mode,
            prev: PrevFrame::default(),
            gain_adjust: 1.0,
            repeats: 0,
        }
    }

    /// Codeword format this decoder consumes.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current output scale.
    pub fn gain_adjust(&self) -> f32 {
        self.gain_adjust
    }

    /// Set the output scale, clamped to 0..=32. A non-finite value resets it
    /// to 1.
    pub fn set_gain_adjust(&mut self, gain: f32) {
        self.gain_adjust = if gain.is_finite() {
            gain.clamp(0.0, 32.0)
        } else {
            1.0
        };
    }

    /// Decode one codeword into a 160-sample frame of signed 16-bit PCM.
    ///
    /// Returns the number of transmission errors corrected along the way.
    pub fn decode(&mut self, codeword: &[u8], pcm: &mut [i16]) -> Result<usize> {
        self.check_codeword(codeword)?;
        check_pcm(pcm.len())?;

        let mut samples = [0.0; SAMPLES_PER_FRAME];
        let errors = self.run(codeword, &mut samples);

        for (pcm, &s) in pcm.iter_mut().zip(samples.iter()) {
            *pcm = s.round() as i16;
        }

        Ok(errors)
    }

    /// Decode one codeword into 32-bit float samples on the same scale as
    /// [`decode`](Self::decode), without the rounding.
    pub fn decode_float(&mut self, codeword: &[u8], pcm: &mut [f32]) -> Result<usize> {
        self.check_codeword(codeword)?;
        check_pcm(pcm.len())?;

        Ok(self.run(codeword, pcm))
    }

    fn check_codeword(&self, codeword: &[u8]) -> Result<()> {
        let expected = self.mode.codeword_len();

        if codeword.len() == expected {
            Ok(())
        } else {
            Err(Error::WrongCodewordLen {
                expected,
                actual: codeword.len(),
            })
        }
    }

    fn run(&mut self, codeword: &[u8], out: &mut [f32]) -> usize {
        let frame = frame::unpack(codeword, self.mode);
        let fields = Fields::from_bits(frame.bits);

        let (params, voice) = match FrameClass::new(fields.pitch as usize, self.mode) {
            FrameClass::Voice(pitch) => {
                let params = BaseParams::new(pitch);

                (params, VoiceDecisions::new(fields.voicing as usize, &params))
            }
            FrameClass::Silence => {
                let params = BaseParams::silence();

                (params, VoiceDecisions::all_unvoiced(&params))
            }
            FrameClass::Tone | FrameClass::Erasure => {
                debug!(pitch = fields.pitch, "control frame, muting");

                out.fill(0.0);
                self.reset();

                return frame.errors;
            }
        };

        let errors = Errors::new(frame.errors, self.prev.err_rate);

        if errors.should_repeat() {
            self.repeats = self.repeats.saturating_add(1);

            if self.repeats > MAX_REPEATS {
                debug!(total = frame.errors, "exhausted repeats, muting");

                // The counter stays up, so the mute holds over further
                // corrupted frames and only a clean one clears it.
                out.fill(0.0);
                self.prev = PrevFrame::default();
            } else {
                debug!(
                    total = frame.errors,
                    repeats = self.repeats,
                    "repeating previous frame"
                );

                self.repeat(frame.bits, errors.rate, out);
            }

            return frame.errors;
        }

        let gains = Gains::new(fields.gain as usize, self.prev.gamma);
        let coefs = Coefficients::new(&fields, &params);
        let spectrals = Spectrals::new(&coefs, &gains, &params, &self.prev);

        trace!(
            pitch = fields.pitch,
            harmonics = params.harmonics,
            gamma = gains.gamma,
            errors = frame.errors,
            "voice frame"
        );

        self.synthesize(&params, &voice, &spectrals, fields.to_bits(), out);

        let mut phase = self.prev.phase.clone();
        phase.advance(&params);

        self.prev = PrevFrame {
            params,
            spectrals,
            voice,
            gamma: gains.gamma,
            err_rate: errors.rate,
            phase,
        };
        self.repeats = 0;

        frame.errors
    }

    /// Sum the voiced and unvoiced signals over one frame.
    fn synthesize(
        &self,
        params: &BaseParams,
        voice: &VoiceDecisions,
        spectrals: &Spectrals,
        seed: u64,
        out: &mut [f32],
    ) {
        let mut noise = Noise::new(seed);

        let unvoiced = Unvoiced::new(params, &self.prev, spectrals, voice, &mut noise);
        let voiced = Voiced::new(params, &self.prev, spectrals, voice, &self.prev.phase);

        for (n, s) in out.iter_mut().enumerate() {
            *s = self.gain_adjust * (voiced.get(n) + unvoiced.get(n));
        }
    }

    /// Synthesize a repeat of the previous frame with its amplitudes decayed,
    /// in place of a frame whose parameters can't be trusted.
    fn repeat(&mut self, seed: u64, err_rate: f32, out: &mut [f32]) {
        let params = self.prev.params;
        let faded = self.prev.spectrals.scaled(REPEAT_DECAY);

        {
            let mut noise = Noise::new(seed);

            let unvoiced = Unvoiced::new(&params, &self.prev, &faded, &self.prev.voice, &mut noise);
            let voiced = Voiced::new(&params, &self.prev, &faded, &self.prev.voice, &self.prev.phase);

            for (n, s) in out.iter_mut().enumerate() {
                *s = self.gain_adjust * (voiced.get(n) + unvoiced.get(n));
            }
        }

        // The decayed envelope becomes the reference for the next frame, so
        // a run of repeats keeps fading.
        self.prev.spectrals = faded;
        self.prev.err_rate = err_rate;
        self.prev.phase.advance(&params);
    }

    /// Drop all interframe state.
    fn reset(&mut self) {
        self.prev = PrevFrame::default();
        self.repeats = 0;
    }
}

fn check_pcm(len: usize) -> Result<()> {
    if len == SAMPLES_PER_FRAME {
        Ok(())
    } else {
        Err(Error::WrongPcmLen {
            expected: SAMPLES_PER_FRAME,
            actual: len,
        })
    }
}
