//! Watson-Crick complementation of a coding strand.
//!
//! Maps each base of a 5'→3' coding strand to its partner, yielding the
//! 3'→5' template strand position by position (A↔T, G↔C). The strand is
//! not reversed.

use ribo_core::{RiboError, Result};

use crate::alphabet::{Alphabet, DnaAlphabet};
use crate::types::DnaSequence;

/// Complement a single DNA base. Returns `None` outside `ACGT`.
#[inline]
pub fn complement_base(b: u8) -> Option<u8> {
    match b {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'G' => Some(b'C'),
        b'C' => Some(b'G'),
        _ => None,
    }
}

/// Complement an unvalidated DNA slice.
///
/// Fails on the first byte outside `ACGT` instead of leaving a hole in the
/// output.
pub fn complement(seq: &[u8]) -> Result<Vec<u8>> {
    seq.iter()
        .enumerate()
        .map(|(position, &base)| {
            complement_base(base).ok_or(RiboError::InvalidBase {
                stage: "complement",
                alphabet: DnaAlphabet::NAME,
                base,
                position,
            })
        })
        .collect()
}

impl DnaSequence {
    /// Return the complementary (template) strand, same orientation.
    pub fn complement(&self) -> DnaSequence {
        // Validated input only contains ACGT.
        let comp: Vec<u8> = self
            .iter()
            .map(|&b| complement_base(b).unwrap_or(b))
            .collect();
        DnaSequence::from_validated(comp)
    }
}
