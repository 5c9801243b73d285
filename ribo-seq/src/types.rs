//! Concrete sequence type aliases.
//!
//! - [`DnaSequence`]: coding or template strand; see [`complement`](mod@crate::complement)
//!   and [`transcribe`](mod@crate::transcribe)
//! - [`RnaSequence`]: messenger RNA; see [`translate`](mod@crate::translate)

use crate::alphabet::{DnaAlphabet, RnaAlphabet};
use crate::seq::ValidatedSeq;

/// A validated DNA sequence (`ACGT`).
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence (`ACGU`).
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;
