//! Translation of messenger RNA into a polypeptide chain.
//!
//! The mRNA is read in frame 0 from its first base as consecutive,
//! non-overlapping codons. Every complete codon is translated, stop codons
//! included; 1–2 trailing bases are reported as an [`IncompleteCodon`]
//! rather than translated.

use std::fmt;
use std::ops::Deref;

use ribo_core::{RiboError, Result};

use crate::alphabet::{Alphabet, RnaAlphabet};
use crate::codon::{AminoAcid, Codon};
use crate::types::RnaSequence;

/// Ordered amino-acid tokens produced by translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polypeptide(Vec<AminoAcid>);

impl Polypeptide {
    /// Token strings (`"M"`, `"K"`, `"STOP"`, ...), in order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|aa| aa.symbol())
    }

    /// Number of stop tokens in the chain.
    pub fn stop_count(&self) -> usize {
        self.0.iter().filter(|aa| aa.is_stop()).count()
    }
}

impl Deref for Polypeptide {
    type Target = [AminoAcid];

    fn deref(&self) -> &[AminoAcid] {
        &self.0
    }
}

impl FromIterator<AminoAcid> for Polypeptide {
    fn from_iter<I: IntoIterator<Item = AminoAcid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Polypeptide {
    /// Tokens concatenated without separators, e.g. `MKSTOP`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aa in &self.0 {
            f.write_str(aa.symbol())?;
        }
        Ok(())
    }
}

/// Trailing bases that did not complete a codon. Non-fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IncompleteCodon {
    /// Offset of the first leftover base in the mRNA.
    pub offset: usize,
    /// The 1 or 2 leftover bases.
    pub bases: String,
}

impl fmt::Display for IncompleteCodon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trailing base(s) '{}' at offset {} do not form a complete codon",
            self.bases.len(),
            self.bases,
            self.offset
        )
    }
}

/// Result of translating one mRNA.
///
/// Serialize-only: a translation is always derived from its mRNA.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Translation {
    pub polypeptide: Polypeptide,
    pub incomplete: Option<IncompleteCodon>,
}

fn incomplete_tail(mrna: &[u8]) -> Option<IncompleteCodon> {
    let offset = mrna.len() - mrna.len() % 3;
    let tail = &mrna[offset..];
    (!tail.is_empty()).then(|| IncompleteCodon {
        offset,
        bases: String::from_utf8_lossy(tail).into_owned(),
    })
}

/// Translate an unvalidated mRNA slice.
///
/// Complete codons are validated as they are read; a foreign symbol in
/// the leftover tail is also rejected, so the whole input is checked.
pub fn translate(mrna: &[u8]) -> Result<Translation> {
    let polypeptide = mrna
        .chunks_exact(3)
        .enumerate()
        .map(|(i, chunk)| {
            Codon::new(chunk)
                .map(|c| c.amino_acid())
                .map_err(|err| match err {
                    RiboError::InvalidBase {
                        stage,
                        alphabet,
                        base,
                        position,
                    } => RiboError::InvalidBase {
                        stage,
                        alphabet,
                        base,
                        position: i * 3 + position,
                    },
                    other => other,
                })
        })
        .collect::<Result<Polypeptide>>()?;

    let incomplete = incomplete_tail(mrna);
    if let Some(tail) = &incomplete {
        if let Some((i, base)) = RnaAlphabet::first_invalid(tail.bases.as_bytes()) {
            return Err(RiboError::InvalidBase {
                stage: "translate",
                alphabet: RnaAlphabet::NAME,
                base,
                position: tail.offset + i,
            });
        }
    }

    Ok(Translation {
        polypeptide,
        incomplete,
    })
}

impl RnaSequence {
    /// Translate every complete codon, from the first base, with the
    /// standard genetic code.
    pub fn translate(&self) -> Translation {
        let polypeptide = self
            .chunks_exact(3)
            .filter_map(|chunk| Codon::new(chunk).ok())
            .map(|c| c.amino_acid())
            .collect();
        Translation {
            polypeptide,
            incomplete: incomplete_tail(self),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'U')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn chain_length_is_floor_n_over_3(seq in rna(300)) {
            let t = translate(&seq).unwrap();
            prop_assert_eq!(t.polypeptide.len(), seq.len() / 3);
            prop_assert_eq!(t.incomplete.is_some(), seq.len() % 3 != 0);
        }
    }
}
