//! Frame gain, coded differentially against the previous frame.

use crate::tables::DG_TABLE;

/// Decoded frame gain γ in the log2 domain.
#[derive(Copy, Clone, Debug)]
pub struct Gains {
    /// γ = ∆γ[b<sub>2</sub>] + γ<sub>prev</sub>/2.
    pub gamma: f32,
}

impl Gains {
    /// Decode the gain symbol b<sub>2</sub> against the previous frame's γ.
    pub fn new(symbol: usize, prev_gamma: f32) -> Gains {
        Gains {
            gamma: DG_TABLE[symbol.min(DG_TABLE.len() - 1)] + 0.5 * prev_gamma,
        }
    }
}

/// Choose the gain symbol whose level is closest to the wanted differential.
pub fn quantize(delta: f32) -> usize {
    DG_TABLE
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (*a - delta)
                .abs()
                .partial_cmp(&(*b - delta).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}
