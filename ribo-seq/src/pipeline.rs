//! The decoding pipeline: coding strand → template strand → mRNA → protein.
//!
//! Input is validated once at entry; every later stage works on typed,
//! already-valid sequences and cannot fail. Each stage owns its output
//! until it is handed to the next one.

use ribo_core::{Result, Sequence, Summarizable};
use tracing::{debug, warn};

use crate::clean::clean_with_report;
use crate::translate::Translation;
use crate::types::{DnaSequence, RnaSequence};

/// Every intermediate product of one decoding run.
///
/// With the `serde` feature, deserializing reads `coding` and re-runs the
/// stages; a stored `template` or `mrna` that disagrees with them is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Decoded {
    /// The cleaned, validated 5'→3' coding strand.
    pub coding: DnaSequence,
    /// The complementary 3'→5' template strand.
    pub template: DnaSequence,
    /// Messenger RNA transcribed from the template.
    pub mrna: RnaSequence,
    pub translation: Translation,
}

impl Decoded {
    /// Number of base pairs in the coding strand.
    pub fn base_pairs(&self) -> usize {
        self.coding.len()
    }

    /// Sequence size in kilobases (base pairs / 1024).
    pub fn size_kb(&self) -> f64 {
        self.base_pairs() as f64 / 1024.0
    }

    /// Number of translated tokens, stops included.
    pub fn amino_acid_count(&self) -> usize {
        self.translation.polypeptide.len()
    }
}

impl Summarizable for Decoded {
    fn summary(&self) -> String {
        format!(
            "{} bp -> {} codons ({} stop)",
            self.base_pairs(),
            self.amino_acid_count(),
            self.translation.polypeptide.stop_count()
        )
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decoded {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct Stored {
            coding: DnaSequence,
            template: Option<DnaSequence>,
            mrna: Option<RnaSequence>,
        }

        let stored = Stored::deserialize(deserializer)?;
        let decoded = run_stages(stored.coding);
        if stored.template.is_some_and(|t| t != decoded.template) {
            return Err(D::Error::custom(
                "template strand is not the complement of the coding strand",
            ));
        }
        if stored.mrna.is_some_and(|m| m != decoded.mrna) {
            return Err(D::Error::custom(
                "mRNA is not the transcript of the template strand",
            ));
        }
        Ok(decoded)
    }
}

/// Decode a cleaned coding strand.
///
/// Fails with [`RiboError::InvalidBase`](ribo_core::RiboError::InvalidBase)
/// before any stage runs if a byte is outside `ACGT` (lowercase is
/// accepted and uppercased).
pub fn decode(coding: &[u8]) -> Result<Decoded> {
    let coding = DnaSequence::new(coding)?;
    debug!(bases = coding.len(), "validated coding strand");
    Ok(run_stages(coding))
}

fn run_stages(coding: DnaSequence) -> Decoded {
    let template = coding.complement();
    debug!(bases = template.len(), "complemented to template strand");

    let mrna: RnaSequence = template.transcribe();
    debug!(bases = mrna.len(), "transcribed mRNA");

    let translation = mrna.translate();
    debug!(
        residues = translation.polypeptide.len(),
        stops = translation.polypeptide.stop_count(),
        "translated mRNA"
    );
    if let Some(tail) = &translation.incomplete {
        warn!(offset = tail.offset, bases = %tail.bases, "{tail}");
    }

    Decoded {
        coding,
        template,
        mrna,
        translation,
    }
}

/// Clean raw sequence text, then [`decode`] it.
pub fn decode_raw(raw: &[u8]) -> Result<Decoded> {
    let (cleaned, report) = clean_with_report(raw);
    debug!(
        input_bytes = report.input_bytes,
        kept = report.kept,
        removed = report.removed,
        "cleaned raw sequence"
    );
    decode(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribo_core::RiboError;

    #[test]
    fn end_to_end_worked_example() {
        let d = decode(b"ATGAAATAG").unwrap();
        assert_eq!(d.coding.as_ref(), b"ATGAAATAG");
        assert_eq!(d.template.as_ref(), b"TACTTTATC");
        assert_eq!(d.mrna.as_ref(), b"AUGAAAUAG");
        let tokens: Vec<_> = d.translation.polypeptide.tokens().collect();
        assert_eq!(tokens, ["M", "K", "STOP"]);
    }

    #[test]
    fn tac_coding_strand() {
        // coding TAC -> template ATG -> mRNA UAC -> Tyr
        let d = decode(b"TAC").unwrap();
        assert_eq!(d.template.as_ref(), b"ATG");
        assert_eq!(d.mrna.as_ref(), b"UAC");
        assert_eq!(d.translation.polypeptide.to_string(), "Y");
    }

    #[test]
    fn invalid_input_fails_fast() {
        let err = decode(b"ATGNNN").unwrap_err();
        assert!(matches!(
            err,
            RiboError::InvalidBase {
                stage: "input",
                alphabet: "DNA",
                base: b'N',
                position: 3,
            }
        ));
    }

    #[test]
    fn raw_input_is_cleaned() {
        let d = decode_raw(b"      1 atgaaa tag\n").unwrap();
        assert_eq!(d.translation.polypeptide.to_string(), "MKSTOP");
        assert_eq!(d.base_pairs(), 9);
    }

    #[test]
    fn stats() {
        let d = decode(&b"ATG".repeat(512)).unwrap();
        assert_eq!(d.base_pairs(), 1536);
        assert!((d.size_kb() - 1.5).abs() < 1e-12);
        assert_eq!(d.amino_acid_count(), 512);
        assert_eq!(d.summary(), "1536 bp -> 512 codons (0 stop)");
    }

    #[test]
    fn trailing_bases_do_not_abort() {
        let d = decode(b"ATGAAATA").unwrap();
        assert_eq!(d.amino_acid_count(), 2);
        assert_eq!(d.translation.incomplete.unwrap().bases, "UA");
    }

    #[test]
    fn empty_input() {
        let d = decode(b"").unwrap();
        assert_eq!(d.amino_acid_count(), 0);
        assert!(d.translation.incomplete.is_none());
        assert_eq!(d.size_kb(), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_reruns_stages() {
        let json = serde_json::to_value(decode(b"ATGAAATAGC").unwrap()).unwrap();
        let back: Decoded = serde_json::from_value(json).unwrap();
        assert_eq!(back, decode(b"ATGAAATAGC").unwrap());

        let from_coding: Decoded =
            serde_json::from_value(serde_json::json!({ "coding": "atg" })).unwrap();
        assert_eq!(from_coding.template.as_ref(), b"TAC");
        assert_eq!(from_coding.translation.polypeptide.to_string(), "M");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_mismatched_strands() {
        let mut json = serde_json::to_value(decode(b"ATG").unwrap()).unwrap();
        json["template"] = serde_json::json!("GGG");
        let err = serde_json::from_value::<Decoded>(json).unwrap_err();
        assert!(err.to_string().contains("template strand"));

        let mut json = serde_json::to_value(decode(b"ATG").unwrap()).unwrap();
        json["mrna"] = serde_json::json!("UUU");
        assert!(serde_json::from_value::<Decoded>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_invalid_coding() {
        let json = serde_json::json!({ "coding": "ATGN" });
        assert!(serde_json::from_value::<Decoded>(json).is_err());
    }
}
