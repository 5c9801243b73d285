//! Alphabet definitions for nucleotide sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase) for a sequence type. Only the
//! four unambiguous bases are accepted.

/// Trait for nucleotide alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Sequence
/// constructors uppercase input first, then validate against the alphabet.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte (assumed already uppercased) is valid.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }

    /// Position and value of the first byte outside the alphabet.
    fn first_invalid(bytes: &[u8]) -> Option<(usize, u8)> {
        bytes
            .iter()
            .position(|&b| !Self::is_valid(b))
            .map(|i| (i, bytes[i]))
    }
}

/// DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
}

/// RNA alphabet: `ACGU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGU";
}
