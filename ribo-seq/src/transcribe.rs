//! Transcription of a template strand into messenger RNA.
//!
//! The template strand is paired base by base with ribonucleotides
//! (T→A, A→U, G→C, C→G). Because the template is itself the complement of
//! the coding strand, the resulting mRNA equals the coding strand with
//! thymine replaced by uracil.

use ribo_core::{RiboError, Result};

use crate::alphabet::{Alphabet, DnaAlphabet};
use crate::types::{DnaSequence, RnaSequence};

/// Pair a template-strand DNA base with its ribonucleotide.
/// Returns `None` outside `ACGT`.
#[inline]
pub fn transcribe_base(b: u8) -> Option<u8> {
    match b {
        b'T' => Some(b'A'),
        b'A' => Some(b'U'),
        b'G' => Some(b'C'),
        b'C' => Some(b'G'),
        _ => None,
    }
}

/// Transcribe an unvalidated template-strand slice into mRNA.
pub fn transcribe(template: &[u8]) -> Result<Vec<u8>> {
    template
        .iter()
        .enumerate()
        .map(|(position, &base)| {
            transcribe_base(base).ok_or(RiboError::InvalidBase {
                stage: "transcribe",
                alphabet: DnaAlphabet::NAME,
                base,
                position,
            })
        })
        .collect()
}

impl DnaSequence {
    /// Transcribe this sequence, read as the template strand, into mRNA.
    pub fn transcribe(&self) -> RnaSequence {
        let rna: Vec<u8> = self
            .iter()
            .map(|&b| transcribe_base(b).unwrap_or(b))
            .collect();
        RnaSequence::from_validated(rna)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complement::complement;

    #[test]
    fn pairs_each_base() {
        assert_eq!(transcribe(b"TAGC").unwrap(), b"AUCG");
    }

    #[test]
    fn worked_example() {
        // coding ATGAAATAG -> template TACTTTATC -> mRNA AUGAAAUAG
        assert_eq!(transcribe(b"TACTTTATC").unwrap(), b"AUGAAAUAG");
    }

    #[test]
    fn template_tac_gives_start_codon() {
        assert_eq!(transcribe(b"TAC").unwrap(), b"AUG");
    }

    #[test]
    fn rejects_uracil_in_template() {
        let err = transcribe(b"TAU").unwrap_err();
        assert!(matches!(
            err,
            RiboError::InvalidBase {
                stage: "transcribe",
                base: b'U',
                position: 2,
                ..
            }
        ));
    }

    #[test]
    fn typed_output_is_rna() {
        let template = DnaSequence::new(b"TACCGG").unwrap();
        let mrna = template.transcribe();
        assert_eq!(mrna.as_ref(), b"AUGGCC");
    }

    #[test]
    fn mrna_is_coding_strand_with_uracil() {
        let coding = b"GATTACAGGC";
        let mrna = transcribe(&complement(coding).unwrap()).unwrap();
        let expected: Vec<u8> = coding
            .iter()
            .map(|&b| if b == b'T' { b'U' } else { b })
            .collect();
        assert_eq!(mrna, expected);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::complement::complement;
    use proptest::prelude::*;

    fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn transcription_preserves_length(seq in dna(200)) {
            prop_assert_eq!(transcribe(&seq).unwrap().len(), seq.len());
        }

        #[test]
        fn transcribed_complement_has_no_thymine(seq in dna(200)) {
            let mrna = transcribe(&complement(&seq).unwrap()).unwrap();
            prop_assert!(!mrna.contains(&b'T'));
            for (m, c) in mrna.iter().zip(&seq) {
                let expected = if *c == b'T' { b'U' } else { *c };
                prop_assert_eq!(*m, expected);
            }
        }
    }
}
