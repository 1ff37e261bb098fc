//! Voice frame encoding.

use std::cmp::Ordering;
use std::f32::consts::TAU;

use arrayvec::ArrayVec;
use num_complex::Complex32;
use tracing::{debug, trace};

use crate::coefs::{self, Coefficients};
use crate::consts::{MAX_HARMONICS, NUM_BANDS, SAMPLES_PER_FRAME};
use crate::error::{Error, Result};
use crate::fields::Fields;
use crate::frame;
use crate::gain::{self, Gains};
use crate::mode::Mode;
use crate::params::BaseParams;
use crate::prev::PrevFrame;
use crate::spectral::{Spectrals, PREDICTOR};
use crate::tables::W0_TABLE;
use crate::voiced::Phase;
use crate::voicing::{self, VoiceDecisions};

/// Analysis autocorrelation lag range, covering the pitch table's periods.
const MIN_LAG: usize = 20;
const MAX_LAG: usize = 123;

/// Fraction of the peak self-similarity below which the frame is coded
/// fully unvoiced.
const PERIODICITY_THRESHOLD: f32 = 0.25;

/// A band is voiced when its harmonic energy is at least this multiple of
/// the probe energy between its harmonics.
const VOICED_RATIO: f32 = 2.0;

/// Floor for measured amplitudes before the log2.
const AMP_FLOOR: f32 = 1e-6;

/// Stateful encoder for one voice stream.
///
/// The encoder mirrors the decoder's interframe state by dequantizing its
/// own output fields, so the gain and envelope prediction on the two ends
/// stay aligned. Feed each stream its own encoder, one 20ms block at a
/// time, in order.
pub struct Encoder {
    mode: Mode,
    /// Mirror of the receiving decoder's carried state.
    prev: PrevFrame,
    /// Input scale applied before analysis.
    gain_adjust: f32,
}

impl Encoder {
    /// Create an encoder emitting the given codeword format.
    pub fn new(mode: Mode) -> Encoder {
        Encoder {
            mode,
            prev: PrevFrame::default(),
            gain_adjust: 1.0,
        }
    }

    /// Codeword format this encoder emits.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current input scale.
    pub fn gain_adjust(&self) -> f32 {
        self.gain_adjust
    }

    /// Set the input scale, clamped to 0..=32. A non-finite value resets it
    /// to 1.
    pub fn set_gain_adjust(&mut self, gain: f32) {
        self.gain_adjust = if gain.is_finite() {
            gain.clamp(0.0, 32.0)
        } else {
            1.0
        };
    }

    /// Encode one 160-sample frame of signed 16-bit PCM into a codeword.
    pub fn encode(&mut self, pcm: &[i16], codeword: &mut [u8]) -> Result<()> {
        self.check_codeword(codeword)?;
        check_pcm(pcm.len())?;

        let mut samples = [0.0; SAMPLES_PER_FRAME];

        for (s, &p) in samples.iter_mut().zip(pcm.iter()) {
            *s = f32::from(p) * self.gain_adjust;
        }

        self.run(&samples, codeword);

        Ok(())
    }

    /// Encode one 160-sample frame of 32-bit float PCM, on the same scale as
    /// [`encode`](Self::encode).
    pub fn encode_float(&mut self, pcm: &[f32], codeword: &mut [u8]) -> Result<()> {
        self.check_codeword(codeword)?;
        check_pcm(pcm.len())?;

        let mut samples = [0.0; SAMPLES_PER_FRAME];

        for (s, &p) in samples.iter_mut().zip(pcm.iter()) {
            *s = p * self.gain_adjust;
        }

        self.run(&samples, codeword);

        Ok(())
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

    fn run(&mut self, samples: &[f32; SAMPLES_PER_FRAME], codeword: &mut [u8]) {
        let fields = self.analyze(samples);

        frame::pack(fields.to_bits(), self.mode, codeword);
        self.rotate(&fields);
    }

    /// Reduce one block of samples to quantized model fields.
    fn analyze(&self, samples: &[f32; SAMPLES_PER_FRAME]) -> Fields {
        let (pitch, periodic) = match estimate_period(samples) {
            Some(period) => (nearest_pitch(period.recip()), true),
            None => {
                debug!("no periodicity, coding unvoiced");

                (0, false)
            }
        };

        let params = BaseParams::new(pitch);
        let spectrum = Spectrum::new(samples, &params);

        let bands = if periodic {
            spectrum.voiced_bands()
        } else {
            [false; NUM_BANDS]
        };
        let voicing = voicing::quantize(bands);

        let gamma = spectrum.mean_log2() + 0.5 * (params.harmonics as f32).log2();
        let gain = gain::quantize(gamma - 0.5 * self.prev.gamma);

        let target = self.residual_target(&spectrum, &params);
        let residuals = coefs::quantize(&target, &params);

        trace!(
            pitch,
            harmonics = params.harmonics,
            voicing,
            gamma,
            "analyzed frame"
        );

        Fields {
            pitch: pitch as u8,
            voicing: voicing as u8,
            gain: gain as u8,
            prba24: residuals.prba24,
            prba58: residuals.prba58,
            hoc: residuals.hoc,
        }
    }

    /// Residual the decoder must reproduce once its prediction from the
    /// mirrored previous envelope is taken out.
    fn residual_target(
        &self,
        spectrum: &Spectrum,
        params: &BaseParams,
    ) -> ArrayVec<f32, MAX_HARMONICS> {
        let harmonics = params.harmonics as usize;
        let scale = self.prev.params.harmonics as f32 / params.harmonics as f32;

        let sum = (1..=harmonics)
            .map(|l| self.prev.spectrals.interpolate(scale * l as f32))
            .sum::<f32>()
            / harmonics as f32;

        (1..=harmonics)
            .map(|l| {
                let pred = self.prev.spectrals.interpolate(scale * l as f32);

                spectrum.log2m[l - 1] - PREDICTOR * (pred - sum)
            })
            .collect()
    }

    /// Dequantize the emitted fields the way the decoder will, making the
    /// mirrored state match the decoder's.
    fn rotate(&mut self, fields: &Fields) {
        let params = BaseParams::new(fields.pitch as usize);
        let gains = Gains::new(fields.gain as usize, self.prev.gamma);
        let coefs = Coefficients::new(fields, &params);
        let spectrals = Spectrals::new(&coefs, &gains, &params, &self.prev);

        self.prev = PrevFrame {
            params,
            spectrals,
            voice: VoiceDecisions::new(fields.voicing as usize, &params),
            gamma: gains.gamma,
            err_rate: 0.0,
            phase: Phase::default(),
        };
    }
}

/// Windowed single-bin correlations of one block at each harmonic of the
/// candidate fundamental.
struct Spectrum {
    /// Measured log2 M<sub>l</sub> at each harmonic.
    log2m: ArrayVec<f32, MAX_HARMONICS>,
    /// Coherent energy at the harmonics of each macro-band.
    harmonic: [f32; NUM_BANDS],
    /// Energy probed halfway between the harmonics of each macro-band.
    probe: [f32; NUM_BANDS],
}

impl Spectrum {
    fn new(samples: &[f32; SAMPLES_PER_FRAME], params: &BaseParams) -> Spectrum {
        let fundamental = params.angular();

        let mut window = [0.0; SAMPLES_PER_FRAME];
        let mut wsum = 0.0;

        for (n, w) in window.iter_mut().enumerate() {
            *w = 0.5 - 0.5 * (TAU * n as f32 / (SAMPLES_PER_FRAME - 1) as f32).cos();
            wsum += *w;
        }

        let mut log2m = ArrayVec::new();
        let mut harmonic = [0.0; NUM_BANDS];
        let mut probe = [0.0; NUM_BANDS];

        for l in 1..=params.harmonics as usize {
            let h = correlate(samples, &window, fundamental * l as f32);
            let p = correlate(samples, &window, fundamental * (l as f32 + 0.5));

            let band = voicing::band(l, params);
            harmonic[band] += h.norm_sqr();
            probe[band] += p.norm_sqr();

            // A single-bin correlation of a·cos(ωn) comes out at a·Σw/2.
            let amp = (2.0 * h.norm() / wsum).max(AMP_FLOOR);
            log2m.push(amp.log2());
        }

        Spectrum {
            log2m,
            harmonic,
            probe,
        }
    }

    fn voiced_bands(&self) -> [bool; NUM_BANDS] {
        let mut bands = [false; NUM_BANDS];

        for (b, v) in bands.iter_mut().enumerate() {
            *v = self.harmonic[b] > VOICED_RATIO * self.probe[b];
        }

        bands
    }

    fn mean_log2(&self) -> f32 {
        self.log2m.iter().sum::<f32>() / self.log2m.len() as f32
    }
}

/// Correlate the block against a windowed complex exponential at the given
/// frequency in radians per sample.
fn correlate(
    samples: &[f32; SAMPLES_PER_FRAME],
    window: &[f32; SAMPLES_PER_FRAME],
    freq: f32,
) -> Complex32 {
    samples
        .iter()
        .zip(window.iter())
        .enumerate()
        .map(|(n, (&s, &w))| w * s * Complex32::from_polar(1.0, -freq * n as f32))
        .sum()
}

/// Estimated pitch period of the block, if it looks periodic at all.
fn estimate_period(samples: &[f32; SAMPLES_PER_FRAME]) -> Option<f32> {
    let mut corr = [0.0; MAX_LAG + 1];
    let mut best = MIN_LAG;

    for lag in MIN_LAG..=MAX_LAG {
        let n = SAMPLES_PER_FRAME - lag;

        let mut dot = 0.0;
        let mut head = 0.0;
        let mut tail = 0.0;

        for i in 0..n {
            dot += samples[i] * samples[i + lag];
            head += samples[i] * samples[i];
            tail += samples[i + lag] * samples[i + lag];
        }

        let denom = (head * tail).sqrt();

        corr[lag] = if denom > 0.0 { dot / denom } else { 0.0 };

        if corr[lag] > corr[best] {
            best = lag;
        }
    }

    if corr[best] < PERIODICITY_THRESHOLD {
        return None;
    }

    // The peak can land on a multiple of the true period; take the shortest
    // sub-multiple nearly as strong as the peak.
    for div in (2..=4).rev() {
        let center = (best + div / 2) / div;

        if center <= MIN_LAG || center >= MAX_LAG {
            continue;
        }

        let cand = (center - 1..=center + 1)
            .max_by(|&a, &b| corr[a].partial_cmp(&corr[b]).unwrap_or(Ordering::Equal))
            .unwrap_or(center);

        if corr[cand] >= 0.9 * corr[best] {
            best = cand;
            break;
        }
    }

    Some(refine(&corr, best))
}

/// Parabolic interpolation of the correlation peak.
fn refine(corr: &[f32; MAX_LAG + 1], lag: usize) -> f32 {
    if lag <= MIN_LAG || lag >= MAX_LAG {
        return lag as f32;
    }

    let (a, b, c) = (corr[lag - 1], corr[lag], corr[lag + 1]);
    let denom = a - 2.0 * b + c;

    if denom.abs() < 1e-9 {
        return lag as f32;
    }

    lag as f32 + (0.5 * (a - c) / denom).clamp(-0.5, 0.5)
}

/// Pitch table index closest to the estimated fundamental.
fn nearest_pitch(fundamental: f32) -> usize {
    W0_TABLE
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (*a - fundamental)
                .abs()
                .partial_cmp(&(*b - fundamental).abs())
                .unwrap_or(Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
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
