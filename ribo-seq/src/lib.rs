//! DNA-to-protein decoding for the ribo toolkit.
//!
//! Turns a coding strand into the polypeptide chain it encodes in three
//! stages, each a pure function of its input:
//!
//! - **Complementer**: [`DnaSequence::complement`] / [`complement()`]
//! - **Transcriber**: [`DnaSequence::transcribe`] / [`transcribe()`]
//! - **Translator**: [`RnaSequence::translate`] / [`translate()`], backed by
//!   the static [`CODON_TABLE`]
//!
//! plus [`clean()`] for raw record text and [`decode`] / [`decode_raw`] to run
//! the whole pipeline.
//!
//! # Example
//!
//! ```
//! use ribo_seq::{decode, DnaSequence};
//!
//! let coding = DnaSequence::new(b"atgaaatag").unwrap();
//! let template = coding.complement();
//! assert_eq!(template.as_ref(), b"TACTTTATC");
//!
//! let mrna = template.transcribe();
//! assert_eq!(mrna.as_ref(), b"AUGAAAUAG");
//!
//! let protein = mrna.translate().polypeptide;
//! assert_eq!(protein.tokens().collect::<Vec<_>>(), ["M", "K", "STOP"]);
//!
//! // Or all at once
//! let decoded = decode(b"ATGAAATAG").unwrap();
//! assert_eq!(decoded.translation.polypeptide.to_string(), "MKSTOP");
//! ```

pub mod alphabet;
pub mod clean;
pub mod codon;
pub mod complement;
pub mod pipeline;
pub mod seq;
pub mod transcribe;
pub mod translate;
pub mod types;

pub use alphabet::{Alphabet, DnaAlphabet, RnaAlphabet};

pub use seq::ValidatedSeq;

pub use types::{DnaSequence, RnaSequence};

pub use clean::{clean, clean_with_report, CleanReport};

pub use complement::{complement, complement_base};
pub use transcribe::{transcribe, transcribe_base};

pub use codon::{all_codons, base_index, codons_for, lookup, AminoAcid, Codon, CODON_TABLE};
pub use translate::{translate, IncompleteCodon, Polypeptide, Translation};

pub use pipeline::{decode, decode_raw, Decoded};
