//! Golay(23,12) error correction.
//!
//! The code is perfect with minimum distance 7: every 23-bit word sits within
//! Hamming distance 3 of exactly one codeword, so decoding always lands on a
//! codeword and reports how many bits it moved. Four or more channel errors
//! alias to a nearby valid codeword; catching those falls to the parameter
//! layer above.
//!
//! Codewords are systematic, data in the upper 12 bits and parity in the
//! lower 11.

/// Generator polynomial x<sup>11</sup> + x<sup>9</sup> + x<sup>7</sup> +
/// x<sup>6</sup> + x<sup>5</sup> + x + 1.
const POLY: u32 = 0xAE3;

const WORD_BITS: usize = 23;
const DATA_BITS: usize = 12;
const PARITY_BITS: usize = 11;

const WORD_MASK: u32 = (1 << WORD_BITS) - 1;
const DATA_MASK: u32 = (1 << DATA_BITS) - 1;
const PARITY_MASK: u32 = (1 << PARITY_BITS) - 1;

/// Build the 23-bit codeword for the given 12 data bits.
pub fn encode(data: u16) -> u32 {
    let shifted = (u32::from(data) & DATA_MASK) << PARITY_BITS;
    shifted | residue(shifted)
}

/// Decode 23 received bits into the nearest codeword's data bits and the
/// number of bit errors corrected along the way.
pub fn decode(word: u32) -> (u16, usize) {
    let word = word & WORD_MASK;
    let pattern = error_pattern(residue(word));
    let fixed = word ^ pattern;

    ((fixed >> PARITY_BITS) as u16, pattern.count_ones() as usize)
}

/// Remainder of the given word modulo the generator polynomial.
fn residue(word: u32) -> u32 {
    let mut rem = word;

    for bit in (PARITY_BITS..WORD_BITS).rev() {
        if rem & 1 << bit != 0 {
            rem ^= POLY << (bit - PARITY_BITS);
        }
    }

    rem & PARITY_MASK
}

/// Find the minimum-weight error pattern having the given syndrome.
///
/// Syndromes are linear, so the syndrome of an n-bit pattern is the XOR of n
/// single-bit syndromes. The search tries weights 1, 2, 3 in order; a perfect
/// code guarantees one of them matches whenever the syndrome is nonzero.
fn error_pattern(syndrome: u32) -> u32 {
    if syndrome == 0 {
        return 0;
    }

    // Syndromes of each single-bit error and the reverse map.
    let mut single = [0u32; WORD_BITS];
    let mut bit_for = [u8::MAX; 1 << PARITY_BITS];

    for (i, syn) in single.iter_mut().enumerate() {
        *syn = residue(1 << i);
        bit_for[*syn as usize] = i as u8;
    }

    let lone = bit_for[syndrome as usize];

    if lone != u8::MAX {
        return 1 << lone;
    }

    for i in 0..WORD_BITS {
        let rest = bit_for[(syndrome ^ single[i]) as usize];

        if rest != u8::MAX && rest as usize > i {
            return 1 << i | 1 << rest;
        }
    }

    for i in 0..WORD_BITS {
        for j in i + 1..WORD_BITS {
            let rest = bit_for[(syndrome ^ single[i] ^ single[j]) as usize];

            if rest != u8::MAX && rest as usize > j {
                return 1 << i | 1 << j | 1 << rest;
            }
        }
    }

    // Unreachable for a perfect code.
    0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_encode_systematic() {
        for data in 0..1 << DATA_BITS {
            let word = encode(data);
            assert_eq!(word >> PARITY_BITS, u32::from(data));
            assert_eq!(residue(word), 0);
        }
    }

    #[test]
    fn test_clean_roundtrip() {
        for data in 0..1 << DATA_BITS {
            assert_eq!(decode(encode(data)), (data, 0));
        }
    }

    #[test]
    fn test_single_errors() {
        let word = encode(0xA5A);

        for bit in 0..WORD_BITS {
            assert_eq!(decode(word ^ 1 << bit), (0xA5A, 1));
        }
    }

    #[test]
    fn test_double_errors() {
        let word = encode(0x123);

        for i in 0..WORD_BITS {
            for j in i + 1..WORD_BITS {
                assert_eq!(decode(word ^ 1 << i ^ 1 << j), (0x123, 2));
            }
        }
    }

    #[test]
    fn test_triple_errors() {
        let word = encode(0xFFF);

        assert_eq!(decode(word ^ 0b111), (0xFFF, 3));
        assert_eq!(decode(word ^ 1 << 22 ^ 1 << 11 ^ 1), (0xFFF, 3));
        assert_eq!(decode(word ^ 1 << 5 ^ 1 << 9 ^ 1 << 17), (0xFFF, 3));
    }

    #[test]
    fn test_quad_errors_alias() {
        // Beyond the correction radius the decoder lands on some other
        // codeword, but never silently: distance 7 means at least one
        // "correction" is always reported.
        let word = encode(0x7D0);
        let (data, errs) = decode(word ^ 0b1111);

        assert_ne!((data, errs), (0x7D0, 0));
        assert!(errs >= 1 && errs <= 3);
    }

    #[test]
    fn test_zero_word() {
        assert_eq!(encode(0), 0);
        assert_eq!(decode(0), (0, 0));
    }
}
