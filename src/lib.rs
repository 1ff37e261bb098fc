//! Mixed-excitation (MBE) voice codec for the 20ms, 160-sample frames used
//! by digital voice radio systems.
//!
//! Two codeword formats are supported through [`Mode`]: 72-bit frames with
//! Golay protection, interleaving, and whitening as carried in DMR voice
//! bursts, and 88-bit frames carrying the 49 parameter bits plain at the
//! head.
//!
//! ```
//! use mbe::{Decoder, Encoder, Mode};
//!
//! let mut encoder = Encoder::new(Mode::DmrAmbe);
//! let mut decoder = Decoder::new(Mode::DmrAmbe);
//!
//! let audio = [0i16; 160];
//! let mut codeword = [0u8; 9];
//! let mut output = [0i16; 160];
//!
//! encoder.encode(&audio, &mut codeword)?;
//! let corrected = decoder.decode(&codeword, &mut output)?;
//! assert_eq!(corrected, 0);
//! # Ok::<(), mbe::Error>(())
//! ```

pub mod consts;

mod coefs;
mod decoder;
mod encoder;
mod error;
mod errors;
mod fields;
mod frame;
mod gain;
mod golay;
mod mode;
mod noise;
mod params;
mod prev;
mod spectral;
mod tables;
mod unvoiced;
mod voiced;
mod voicing;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use mode::Mode;
