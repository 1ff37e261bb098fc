//! Codeword transport: bit interleaving, Golay protection, and whitening.
//!
//! Both modes carry the same 49 parameter bits per frame; this module maps
//! them to and from the wire layout of each codeword.
//!
//! The 72-bit format splits the parameter bits into four priority chunks and
//! interleaves them as 36 dibits. Chunk C0 (the 12 most significant bits:
//! pitch and voicing) is Golay(23,12) coded into row 0 at positions 23..=1,
//! with a spare bit at position 0 carrying the word's overall parity. Chunk
//! C1 (the next 12 bits: gain and the top PRBA index) is Golay coded and then
//! whitened with a pseudorandom sequence seeded from C0's data bits; its row
//! holds data at positions 23..=12 and parity at 10..=0, position 11 never
//! being transmitted. Chunks C2 (11 bits) and C3 (14 bits) ride unprotected
//! in rows 2 and 3.
//!
//! The 88-bit format packs the 49 parameter bits at the head, MSB-first, and
//! pads the remainder with zeros; error correction for it lives at the
//! framing layer, not here.

use crate::consts::PARAM_BITS;
use crate::golay;
use crate::mode::Mode;

/// Dibits interleaved into a 72-bit codeword.
const DIBITS: usize = 36;

/// Row index for the first bit of each dibit.
const ROW_W: [usize; DIBITS] = [
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 2, 0, 2, 0, 2, 0, 2, 0,
    2, 0, 2, 0, 2,
];

/// Bit position for the first bit of each dibit.
const POS_X: [usize; DIBITS] = [
    23, 10, 22, 9, 21, 8, 20, 7, 19, 6, 18, 5, 17, 4, 16, 3, 15, 2, 14, 1, 13, 0, 12, 10, 11, 9,
    10, 8, 9, 7, 8, 6, 7, 5, 6, 4,
];

/// Row index for the second bit of each dibit.
const ROW_Y: [usize; DIBITS] = [
    0, 2, 0, 2, 0, 2, 0, 2, 0, 3, 0, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1,
    3, 1, 3, 1, 3,
];

/// Bit position for the second bit of each dibit.
const POS_Z: [usize; DIBITS] = [
    5, 3, 4, 2, 3, 1, 2, 0, 1, 13, 0, 12, 23, 11, 22, 10, 21, 9, 20, 8, 19, 7, 18, 6, 17, 5, 16,
    4, 15, 3, 14, 2, 13, 1, 12, 0,
];

/// A received voice frame: the recovered parameter bits and how many channel
/// errors were corrected recovering them.
pub struct ReceivedFrame {
    /// The 49 parameter bits, right-aligned.
    pub bits: u64,
    /// Bit errors corrected by the Golay decoders.
    pub errors: usize,
}

/// Recover the parameter bits from a codeword of the given mode.
pub fn unpack(codeword: &[u8], mode: Mode) -> ReceivedFrame {
    debug_assert_eq!(codeword.len(), mode.codeword_len());

    match mode {
        Mode::DmrAmbe => unpack_dmr(codeword),
        Mode::Imbe => ReceivedFrame {
            bits: (0..PARAM_BITS).fold(0, |bits, i| bits << 1 | u64::from(bit(codeword, i))),
            errors: 0,
        },
    }
}

/// Build a codeword of the given mode around the parameter bits.
pub fn pack(bits: u64, mode: Mode, codeword: &mut [u8]) {
    debug_assert_eq!(codeword.len(), mode.codeword_len());

    codeword.fill(0);

    match mode {
        Mode::DmrAmbe => pack_dmr(bits, codeword),
        Mode::Imbe => {
            for i in 0..PARAM_BITS {
                if bits >> (PARAM_BITS - 1 - i) & 1 != 0 {
                    set_bit(codeword, i);
                }
            }
        }
    }
}

fn unpack_dmr(codeword: &[u8]) -> ReceivedFrame {
    let rows = deinterleave(codeword);

    // Spare bit at row 0 position 0 is ignored.
    let (c0, errs0) = golay::decode(rows[0] >> 1);
    let (c1, errs1) = golay::decode(fold_row1(rows[1]) ^ whitening(c0));

    let bits = u64::from(c0) << 37
        | u64::from(c1) << 25
        | u64::from(rows[2] & 0x7FF) << 14
        | u64::from(rows[3] & 0x3FFF);

    ReceivedFrame {
        bits,
        errors: errs0 + errs1,
    }
}

fn pack_dmr(bits: u64, codeword: &mut [u8]) {
    let c0 = (bits >> 37 & 0xFFF) as u16;
    let c1 = (bits >> 25 & 0xFFF) as u16;

    let w0 = golay::encode(c0);
    let w1 = golay::encode(c1) ^ whitening(c0);

    let rows = [
        w0 << 1 | w0.count_ones() & 1,
        spread_row1(w1),
        (bits >> 14 & 0x7FF) as u32,
        (bits & 0x3FFF) as u32,
    ];

    interleave(&rows, codeword);
}

/// Collapse row 1's layout (data at 23..=12, parity at 10..=0) into a
/// contiguous 23-bit Golay word.
fn fold_row1(row: u32) -> u32 {
    (row >> 12 & 0xFFF) << 11 | row & 0x7FF
}

fn spread_row1(word: u32) -> u32 {
    (word >> 11) << 12 | word & 0x7FF
}

/// Pseudorandom sequence XORed over the second Golay word, seeded from the
/// first word's data bits.
///
/// The generator is the 16-bit LCG p ← 173p + 13849 starting from 16 times
/// the seed; each step contributes its top bit, first step first (aligned
/// with the word's MSB). XOR-applied, it is its own inverse.
fn whitening(seed: u16) -> u32 {
    let mut p = 16 * u32::from(seed);

    (0..23).fold(0, |mask, _| {
        p = (173 * p + 13849) & 0xFFFF;
        mask << 1 | p >> 15
    })
}

fn deinterleave(bytes: &[u8]) -> [u32; 4] {
    let mut rows = [0u32; 4];

    for i in 0..DIBITS {
        rows[ROW_W[i]] |= bit(bytes, 2 * i) << POS_X[i];
        rows[ROW_Y[i]] |= bit(bytes, 2 * i + 1) << POS_Z[i];
    }

    rows
}

fn interleave(rows: &[u32; 4], bytes: &mut [u8]) {
    for i in 0..DIBITS {
        if rows[ROW_W[i]] >> POS_X[i] & 1 != 0 {
            set_bit(bytes, 2 * i);
        }

        if rows[ROW_Y[i]] >> POS_Z[i] & 1 != 0 {
            set_bit(bytes, 2 * i + 1);
        }
    }
}

fn bit(bytes: &[u8], i: usize) -> u32 {
    u32::from(bytes[i / 8] >> (7 - i % 8)) & 1
}

fn set_bit(bytes: &mut [u8], i: usize) {
    bytes[i / 8] |= 0x80 >> (i % 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_occupancy() {
        let mut seen = [0u32; 4];

        for i in 0..DIBITS {
            for (row, pos) in [(ROW_W[i], POS_X[i]), (ROW_Y[i], POS_Z[i])] {
                assert_eq!(seen[row] >> pos & 1, 0, "row {} position {} reused", row, pos);
                seen[row] |= 1 << pos;
            }
        }

        assert_eq!(seen[0], 0xFFFFFF);
        assert_eq!(seen[1], 0xFFFFFF & !(1 << 11));
        assert_eq!(seen[2], 0x7FF);
        assert_eq!(seen[3], 0x3FFF);
    }

    #[test]
    fn test_whitening() {
        assert_ne!(whitening(0), 0);
        assert_ne!(whitening(0), 0x7FFFFF);
        assert_eq!(whitening(0x5A5), whitening(0x5A5));
        assert!(whitening(0x5A5) <= 0x7FFFFF);
    }

    #[test]
    fn test_row1_layout() {
        let word = 0x7FFFFF;
        let row = spread_row1(word);

        assert_eq!(row >> 11 & 1, 0);
        assert_eq!(fold_row1(row), word);
    }

    #[test]
    fn test_dmr_roundtrip() {
        let bits = 0x1_5A5A_5A5Au64 << 12 | 0xA5A;
        let bits = bits & (1 << PARAM_BITS) - 1;
        let mut codeword = [0u8; 9];

        pack(bits, Mode::DmrAmbe, &mut codeword);
        let frame = unpack(&codeword, Mode::DmrAmbe);

        assert_eq!(frame.bits, bits);
        assert_eq!(frame.errors, 0);
    }

    #[test]
    fn test_dmr_corrects_protected_bits() {
        let bits = 0b0111100_01010_10011_101010101_0110100_11111_0000_1111_010u64;
        let mut codeword = [0u8; 9];

        pack(bits, Mode::DmrAmbe, &mut codeword);

        // Transmitted bit 0 is row 0 position 23, the first Golay word's MSB.
        let mut flipped = codeword;
        flipped[0] ^= 0x80;
        let frame = unpack(&flipped, Mode::DmrAmbe);
        assert_eq!(frame.bits, bits);
        assert_eq!(frame.errors, 1);

        // Transmitted bit 25 is row 1 position 23, the whitened word's MSB.
        let mut flipped = codeword;
        flipped[3] ^= 0x40;
        let frame = unpack(&flipped, Mode::DmrAmbe);
        assert_eq!(frame.bits, bits);
        assert_eq!(frame.errors, 1);
    }

    #[test]
    fn test_unprotected_tail_passes_through() {
        let bits = (1u64 << PARAM_BITS) - 1;
        let mut codeword = [0u8; 9];

        pack(bits, Mode::DmrAmbe, &mut codeword);

        // Transmitted bit 19 is row 3 position 13, the C3 chunk's MSB.
        let mut flipped = codeword;
        flipped[2] ^= 0x10;
        let frame = unpack(&flipped, Mode::DmrAmbe);

        assert_eq!(frame.errors, 0);
        assert_eq!(frame.bits, bits ^ 1 << 13);
    }

    #[test]
    fn test_imbe_head() {
        let bits = (1u64 << PARAM_BITS) - 1;
        let mut codeword = [0u8; 11];

        pack(bits, Mode::Imbe, &mut codeword);

        // 49 ones land in the first 6 bytes plus the top bit of the 7th.
        assert_eq!(
            codeword,
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x80, 0, 0, 0, 0]
        );

        let frame = unpack(&codeword, Mode::Imbe);
        assert_eq!(frame.bits, bits);
        assert_eq!(frame.errors, 0);
    }
}
