//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction uppercases and validates every byte.
//! The inner data is always uppercase, so `Deref<Target=[u8]>` and
//! `as_bytes()` are zero-cost and safe to pass to downstream `&[u8]` APIs.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use ribo_core::{RiboError, Sequence, Summarizable};

use crate::alphabet::Alphabet;

/// A validated nucleotide sequence parameterized by its alphabet.
///
/// `ValidatedSeq<DnaAlphabet>` is a DNA sequence, `ValidatedSeq<RnaAlphabet>`
/// is RNA. The inner bytes are always uppercase.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the alphabet.
    /// Returns [`RiboError::InvalidBase`] for the first byte that is not in
    /// the alphabet after uppercasing.
    pub fn new(bytes: impl AsRef<[u8]>) -> ribo_core::Result<Self> {
        let data: Vec<u8> = bytes.as_ref().iter().map(|b| b.to_ascii_uppercase()).collect();
        if let Some((position, base)) = A::first_invalid(&data) {
            return Err(RiboError::InvalidBase {
                stage: "input",
                alphabet: A::NAME,
                base,
                position,
            });
        }
        Ok(Self {
            data,
            _alphabet: PhantomData,
        })
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// # Safety (logical)
    ///
    /// Caller must guarantee all bytes are valid uppercase members of `A`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        debug_assert!(A::first_invalid(&data).is_none());
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// View the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        // Every alphabet byte is ASCII.
        std::str::from_utf8(&self.data).unwrap_or_default()
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = &self.as_str()[..preview_len];
        if self.data.len() > 20 {
            format!("{} sequence ({} bp): {}...", A::NAME, self.data.len(), preview)
        } else {
            format!("{} sequence ({} bp): {}", A::NAME, self.data.len(), preview)
        }
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, self.as_str())
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DnaAlphabet, RnaAlphabet};

    type DnaSeq = ValidatedSeq<DnaAlphabet>;
    type RnaSeq = ValidatedSeq<RnaAlphabet>;

    #[test]
    fn stores_uppercase() {
        let seq = DnaSeq::new(b"acgt").unwrap();
        assert_eq!(seq.as_bytes(), b"ACGT");
    }

    #[test]
    fn empty_sequence_ok() {
        let seq = DnaSeq::new(b"").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn deref_to_slice() {
        let seq = DnaSeq::new(b"ACGT").unwrap();
        let slice: &[u8] = &seq;
        assert_eq!(slice, b"ACGT");
        assert_eq!(seq[0], b'A');
    }

    #[test]
    fn rejects_wildcard_with_position() {
        let err = DnaSeq::new(b"ACGN").unwrap_err();
        match err {
            RiboError::InvalidBase {
                stage,
                alphabet,
                base,
                position,
            } => {
                assert_eq!(stage, "input");
                assert_eq!(alphabet, "DNA");
                assert_eq!(base, b'N');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rna_rejects_thymine() {
        assert!(RnaSeq::new(b"AUGT").unwrap_err().is_invalid_base());
    }

    #[test]
    fn display_and_debug() {
        let seq = RnaSeq::new(b"augc").unwrap();
        assert_eq!(seq.to_string(), "AUGC");
        assert_eq!(format!("{seq:?}"), "RNA(\"AUGC\")");
    }

    #[test]
    fn summary_truncates_long_sequences() {
        let seq = DnaSeq::new(b"ACGTACGTACGTACGTACGTACGT").unwrap();
        assert_eq!(
            seq.summary(),
            "DNA sequence (24 bp): ACGTACGTACGTACGTACGT..."
        );
        let short = DnaSeq::new(b"ACGT").unwrap();
        assert_eq!(short.summary(), "DNA sequence (4 bp): ACGT");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_string() {
        let seq = DnaSeq::new(b"ATG").unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "\"ATG\"");
        let back: DnaSeq = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
        assert!(serde_json::from_str::<DnaSeq>("\"AXG\"").is_err());
    }
}
