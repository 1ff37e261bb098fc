//! The nine quantizer fields b<sub>0</sub>, ..., b<sub>8</sub> carried by
//! every frame.

/// Bit width of each field, b<sub>0</sub> first.
pub const WIDTHS: [u32; 9] = [7, 5, 5, 9, 7, 5, 4, 4, 3];

/// Quantizer fields split out of the 49 parameter bits.
///
/// The fields are packed MSB-first in priority order, so the block starts
/// with the bits the transport protects hardest: pitch and voicing land in
/// the first Golay word, gain and the top PRBA index in the second.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fields {
    /// Pitch/fundamental index, b<sub>0</sub>.
    pub pitch: u8,
    /// Voiced/unvoiced band pattern index, b<sub>1</sub>.
    pub voicing: u8,
    /// Differential gain index, b<sub>2</sub>.
    pub gain: u8,
    /// PRBA vector index for transform coefficients 2..=4, b<sub>3</sub>.
    pub prba24: u16,
    /// PRBA vector index for transform coefficients 5..=8, b<sub>4</sub>.
    pub prba58: u8,
    /// Higher-order coefficient indices for the four blocks,
    /// b<sub>5</sub>, ..., b<sub>8</sub>.
    pub hoc: [u8; 4],
}

impl Fields {
    /// Split the given parameter bits, right-aligned in the word, into
    /// fields.
    pub fn from_bits(bits: u64) -> Fields {
        Fields {
            pitch: (bits >> 42 & 0x7F) as u8,
            voicing: (bits >> 37 & 0x1F) as u8,
            gain: (bits >> 32 & 0x1F) as u8,
            prba24: (bits >> 23 & 0x1FF) as u16,
            prba58: (bits >> 16 & 0x7F) as u8,
            hoc: [
                (bits >> 11 & 0x1F) as u8,
                (bits >> 7 & 0xF) as u8,
                (bits >> 3 & 0xF) as u8,
                (bits & 0x7) as u8,
            ],
        }
    }

    /// Pack the fields back into 49 right-aligned parameter bits.
    ///
    /// This word also seeds the per-frame noise generator, which is what
    /// makes unvoiced synthesis a pure function of the codeword.
    pub fn to_bits(&self) -> u64 {
        u64::from(self.pitch & 0x7F) << 42
            | u64::from(self.voicing & 0x1F) << 37
            | u64::from(self.gain & 0x1F) << 32
            | u64::from(self.prba24 & 0x1FF) << 23
            | u64::from(self.prba58 & 0x7F) << 16
            | u64::from(self.hoc[0] & 0x1F) << 11
            | u64::from(self.hoc[1] & 0xF) << 7
            | u64::from(self.hoc[2] & 0xF) << 3
            | u64::from(self.hoc[3] & 0x7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PARAM_BITS;

    #[test]
    fn test_widths() {
        assert_eq!(WIDTHS.iter().sum::<u32>() as usize, PARAM_BITS);
    }

    #[test]
    fn test_split() {
        let bits = 0b1010101_10011_01100_110000111_1010011_10001_1001_0110_101;
        let f = Fields::from_bits(bits);

        assert_eq!(f.pitch, 0b1010101);
        assert_eq!(f.voicing, 0b10011);
        assert_eq!(f.gain, 0b01100);
        assert_eq!(f.prba24, 0b110000111);
        assert_eq!(f.prba58, 0b1010011);
        assert_eq!(f.hoc, [0b10001, 0b1001, 0b0110, 0b101]);
        assert_eq!(f.to_bits(), bits);
    }

    #[test]
    fn test_roundtrip_extremes() {
        for bits in [0, (1 << PARAM_BITS) - 1, 0x0AAA_AAAA_AAAA & ((1 << PARAM_BITS) - 1)] {
            assert_eq!(Fields::from_bits(bits).to_bits(), bits);
        }
    }

    #[test]
    fn test_masked_pack() {
        // Out-of-width field values can't leak into neighboring fields.
        let f = Fields {
            pitch: 0xFF,
            voicing: 0xFF,
            gain: 0xFF,
            prba24: 0xFFFF,
            prba58: 0xFF,
            hoc: [0xFF; 4],
        };

        assert_eq!(f.to_bits(), (1 << PARAM_BITS) - 1);
    }
}
