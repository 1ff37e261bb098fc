//! Spectral residual transform.
//!
//! The transmitted residual is a two-level transform of the L values
//! T<sub>l</sub>: an 8-point DCT across the means and first differences of
//! four coefficient blocks (the PRBA vector G<sub>m</sub>), plus up to four
//! higher-order coefficients per block. Decoding runs the inverse: table
//! lookups rebuild G<sub>m</sub>, an 8-point IDCT gives the block pair values
//! R<sub>i</sub>, and per-block IDCTs of C<sub>i,k</sub> give T<sub>l</sub>.

use std::f32::consts::{PI, SQRT_2};

use arrayvec::ArrayVec;

use crate::consts::MAX_HARMONICS;
use crate::fields::Fields;
use crate::params::BaseParams;
use crate::tables::{
    BLOCK_LEN_TABLE, HOC_B5_TABLE, HOC_B6_TABLE, HOC_B7_TABLE, HOC_B8_TABLE, PRBA24_TABLE,
    PRBA58_TABLE,
};

/// Longest residual block, J<sub>4</sub> at L = 56.
const MAX_BLOCK_LEN: usize = 17;

/// Higher-order coefficients transmitted per block.
const HOC_COEFS: usize = 4;

/// Residual transform coefficients T<sub>l</sub>, 1 ≤ l ≤ L.
pub struct Coefficients(ArrayVec<f32, MAX_HARMONICS>);

impl Coefficients {
    /// Rebuild the residual vector from the frame's quantizer fields.
    pub fn new(fields: &Fields, params: &BaseParams) -> Coefficients {
        let prba24 = &PRBA24_TABLE[(fields.prba24 as usize).min(PRBA24_TABLE.len() - 1)];
        let prba58 = &PRBA58_TABLE[(fields.prba58 as usize).min(PRBA58_TABLE.len() - 1)];

        let hoc: [&[f32; HOC_COEFS]; 4] = [
            &HOC_B5_TABLE[(fields.hoc[0] as usize).min(HOC_B5_TABLE.len() - 1)],
            &HOC_B6_TABLE[(fields.hoc[1] as usize).min(HOC_B6_TABLE.len() - 1)],
            &HOC_B7_TABLE[(fields.hoc[2] as usize).min(HOC_B7_TABLE.len() - 1)],
            &HOC_B8_TABLE[(fields.hoc[3] as usize).min(HOC_B8_TABLE.len() - 1)],
        ];

        // G_1 carries no residual information; the frame gain has its own
        // field.
        let gm = [
            0.0, prba24[0], prba24[1], prba24[2], prba58[0], prba58[1], prba58[2], prba58[3],
        ];

        let lens = &BLOCK_LEN_TABLE[params.harmonics as usize];
        let mut coefs = ArrayVec::new();

        for (k, &len) in lens.iter().enumerate() {
            let pair = (idct8(&gm, 2 * k + 1), idct8(&gm, 2 * k + 2));
            let block = Block::new(pair, hoc[k], len);

            coefs.extend((1..=len).map(|j| block.idct(j)));
        }

        Coefficients(coefs)
    }

    /// Retrieve T<sub>l</sub>, 1 ≤ l ≤ L.
    pub fn get(&self, l: usize) -> f32 {
        self.0[l - 1]
    }

    /// Mean over all T<sub>l</sub>.
    pub fn mean(&self) -> f32 {
        self.0.iter().sum::<f32>() / self.0.len() as f32
    }
}

/// Block of coefficients C<sub>i,k</sub>, 1 ≤ k ≤ J<sub>i</sub>.
struct Block(ArrayVec<f32, MAX_BLOCK_LEN>);

impl Block {
    /// Create a block from its R pair, higher-order coefficient row, and
    /// length J<sub>i</sub>.
    fn new(pair: (f32, f32), hoc: &[f32; HOC_COEFS], len: usize) -> Block {
        debug_assert!(len >= 2 && len <= MAX_BLOCK_LEN);

        let mut coefs = ArrayVec::new();

        coefs.push(0.5 * (pair.0 + pair.1));
        coefs.push(0.25 * SQRT_2 * (pair.0 - pair.1));

        // Blocks shorter than 6 truncate the higher-order row; longer blocks
        // zero-pad past it.
        coefs.extend(hoc.iter().copied().take(len - 2));

        while coefs.len() < len {
            coefs.push(0.0);
        }

        Block(coefs)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    /// Compute the IDCT c<sub>i,j</sub> over this block, 1 ≤ j ≤ J<sub>i</sub>.
    fn idct(&self, j: usize) -> f32 {
        debug_assert!(j >= 1 && j <= self.len());

        self.0[0]
            + 2.0
                * (2..=self.len())
                    .map(|k| {
                        self.0[k - 1]
                            * (PI * (k as f32 - 1.0) * (j as f32 - 0.5) / self.len() as f32).cos()
                    })
                    .sum::<f32>()
    }
}

/// 8-point IDCT of the PRBA vector: R<sub>i</sub>, 1 ≤ i ≤ 8.
fn idct8(gm: &[f32; 8], i: usize) -> f32 {
    gm[0]
        + 2.0
            * (2..=8)
                .map(|m| gm[m - 1] * (PI * (m as f32 - 1.0) * (i as f32 - 0.5) / 8.0).cos())
                .sum::<f32>()
}

/// 8-point forward DCT of the block pair values: G<sub>m</sub>, 1 ≤ m ≤ 8.
fn dct8(r: &[f32; 8], m: usize) -> f32 {
    r.iter()
        .enumerate()
        .map(|(i, &v)| v * (PI * (m as f32 - 1.0) * (i as f32 + 0.5) / 8.0).cos())
        .sum::<f32>()
        / 8.0
}

/// Forward DCT over one residual block.
fn dct(block: &[f32], m: usize) -> f32 {
    block
        .iter()
        .enumerate()
        .map(|(j, &v)| v * (PI * (m as f32 - 1.0) * (j as f32 + 0.5) / block.len() as f32).cos())
        .sum::<f32>()
        / block.len() as f32
}

/// Residual quantizer indices chosen by the encoder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResidualIndices {
    pub prba24: u16,
    pub prba58: u8,
    pub hoc: [u8; 4],
}

/// Quantize a residual vector of L values to codebook indices.
///
/// Inverts [`Coefficients::new`]: block DCTs split each block into its pair
/// values and higher-order tail, the pair values transform to G<sub>m</sub>,
/// and each sub-vector gets a minimum-distance codebook search. The searches
/// are independent because the sub-vectors are disjoint in the transform.
pub fn quantize(target: &[f32], params: &BaseParams) -> ResidualIndices {
    debug_assert_eq!(target.len(), params.harmonics as usize);

    let lens = &BLOCK_LEN_TABLE[params.harmonics as usize];

    let mut r = [0.0; 8];
    let mut hoc = [0u8; 4];
    let mut offset = 0;

    for (k, &len) in lens.iter().enumerate() {
        let block = &target[offset..offset + len];
        let coefs: ArrayVec<f32, MAX_BLOCK_LEN> = (1..=len).map(|m| dct(block, m)).collect();

        r[2 * k] = coefs[0] + SQRT_2 * coefs[1];
        r[2 * k + 1] = coefs[0] - SQRT_2 * coefs[1];

        let tail = &coefs[2..len.min(2 + HOC_COEFS)];

        hoc[k] = match k {
            0 => nearest(&HOC_B5_TABLE, tail),
            1 => nearest(&HOC_B6_TABLE, tail),
            2 => nearest(&HOC_B7_TABLE, tail),
            _ => nearest(&HOC_B8_TABLE, tail),
        } as u8;

        offset += len;
    }

    let mut gm = [0.0; 7];

    for (m, slot) in gm.iter_mut().enumerate() {
        *slot = dct8(&r, m + 2);
    }

    ResidualIndices {
        prba24: nearest(&PRBA24_TABLE, &gm[..3]) as u16,
        prba58: nearest(&PRBA58_TABLE, &gm[3..]) as u8,
        hoc,
    }
}

/// Index of the codebook row nearest the point in Euclidean distance over
/// the point's dimensions, ties to the lowest index.
fn nearest<const N: usize>(rows: &[[f32; N]], point: &[f32]) -> usize {
    rows.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            dist(a, point)
                .partial_cmp(&dist(b, point))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn dist<const N: usize>(row: &[f32; N], point: &[f32]) -> f32 {
    point
        .iter()
        .zip(row.iter())
        .map(|(p, r)| (p - r) * (p - r))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::L_TABLE;

    fn pitch_for_harmonics(l: u32) -> usize {
        L_TABLE.iter().position(|&h| h == l).unwrap()
    }

    #[test]
    fn test_lengths() {
        let fields = Fields::from_bits(0);

        for l in 9..=56 {
            let params = BaseParams::new(pitch_for_harmonics(l));
            let coefs = Coefficients::new(&fields, &params);

            assert_eq!(coefs.0.len(), l as usize);
            assert!(coefs.get(l as usize).is_finite());
        }
    }

    #[test]
    fn test_quantize_inverts_decode() {
        // At L = 29 every block transmits its full higher-order row, so a
        // vector decoded from codebook entries must quantize back to the
        // same entries.
        let params = BaseParams::new(75);
        assert_eq!(params.harmonics, 29);

        let fields = Fields {
            pitch: 75,
            voicing: 0,
            gain: 0,
            prba24: 300,
            prba58: 77,
            hoc: [21, 11, 3, 6],
        };

        let coefs = Coefficients::new(&fields, &params);
        let target: Vec<f32> = (1..=29).map(|l| coefs.get(l)).collect();
        let indices = quantize(&target, &params);

        assert_eq!(
            indices,
            ResidualIndices {
                prba24: 300,
                prba58: 77,
                hoc: [21, 11, 3, 6],
            }
        );
    }

    #[test]
    fn test_short_blocks_drop_hoc() {
        // At L = 9 the first three blocks have length 2 and carry no
        // higher-order coefficients at all.
        let params = BaseParams::new(0);
        let mut fields = Fields::from_bits(0);

        let base = Coefficients::new(&fields, &params);

        fields.hoc[0] = 31;
        let changed = Coefficients::new(&fields, &params);

        for l in 1..=9 {
            assert!((base.get(l) - changed.get(l)).abs() < 1e-9);
        }

        // The last block has length 3 and keeps one.
        fields.hoc[3] = 7;
        let changed = Coefficients::new(&fields, &params);

        assert!((changed.get(9) - base.get(9)).abs() > 1e-6);
    }

    #[test]
    fn test_mean() {
        let params = BaseParams::new(75);
        let fields = Fields::from_bits(0x1234_5678_9ABC);
        let coefs = Coefficients::new(&fields, &params);

        let sum: f32 = (1..=29).map(|l| coefs.get(l)).sum();
        assert!((coefs.mean() - sum / 29.0).abs() < 1e-6);
    }
}
