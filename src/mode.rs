//! Codeword formats supported by the codec.

/// Bit-level format of a 20ms voice codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// 72-bit codeword: 49 parameter bits interleaved with two Golay(23,12)
    /// words, as carried in a DMR voice burst.
    DmrAmbe,
    /// 88-bit codeword: 49 parameter bits packed at the head, no error
    /// correction at this layer.
    Imbe,
}

impl Mode {
    /// Codeword length in bytes.
    pub fn codeword_len(self) -> usize {
        match self {
            Mode::DmrAmbe => 9,
            Mode::Imbe => 11,
        }
    }

    /// Whether the 7-bit pitch symbol space reserves 120..=127 for control
    /// frames rather than voice.
    pub(crate) fn has_reserved_pitch(self) -> bool {
        match self {
            Mode::DmrAmbe => true,
            Mode::Imbe => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_codeword_len() {
        assert_eq!(Mode::DmrAmbe.codeword_len(), 9);
        assert_eq!(Mode::Imbe.codeword_len(), 11);
    }
}
