//! The standard genetic code.
//!
//! Codons are indexed per position with U=0, C=1, A=2, G=3 and resolved
//! through a static 4×4×4 table in (first, second, third) base order.
//! AUG encodes methionine; UAA, UAG and UGA are stop codons.

use std::fmt;
use std::str::FromStr;

use ribo_core::{RiboError, Result};

use crate::alphabet::{Alphabet, RnaAlphabet};

// ---------------------------------------------------------------------------
// Amino acids
// ---------------------------------------------------------------------------

/// One of the 20 standard amino acids, or the translation stop signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    Stop,
}

impl AminoAcid {
    /// All tokens, residues in alphabetical three-letter order then `Stop`.
    pub const ALL: [AminoAcid; 21] = [
        AminoAcid::Ala,
        AminoAcid::Arg,
        AminoAcid::Asn,
        AminoAcid::Asp,
        AminoAcid::Cys,
        AminoAcid::Gln,
        AminoAcid::Glu,
        AminoAcid::Gly,
        AminoAcid::His,
        AminoAcid::Ile,
        AminoAcid::Leu,
        AminoAcid::Lys,
        AminoAcid::Met,
        AminoAcid::Phe,
        AminoAcid::Pro,
        AminoAcid::Ser,
        AminoAcid::Thr,
        AminoAcid::Trp,
        AminoAcid::Tyr,
        AminoAcid::Val,
        AminoAcid::Stop,
    ];

    /// One-letter code, or `"STOP"`.
    pub const fn symbol(self) -> &'static str {
        match self {
            AminoAcid::Ala => "A",
            AminoAcid::Arg => "R",
            AminoAcid::Asn => "N",
            AminoAcid::Asp => "D",
            AminoAcid::Cys => "C",
            AminoAcid::Gln => "Q",
            AminoAcid::Glu => "E",
            AminoAcid::Gly => "G",
            AminoAcid::His => "H",
            AminoAcid::Ile => "I",
            AminoAcid::Leu => "L",
            AminoAcid::Lys => "K",
            AminoAcid::Met => "M",
            AminoAcid::Phe => "F",
            AminoAcid::Pro => "P",
            AminoAcid::Ser => "S",
            AminoAcid::Thr => "T",
            AminoAcid::Trp => "W",
            AminoAcid::Tyr => "Y",
            AminoAcid::Val => "V",
            AminoAcid::Stop => "STOP",
        }
    }

    /// IUPAC three-letter abbreviation (`"Ter"` for stop).
    pub const fn three_letter(self) -> &'static str {
        match self {
            AminoAcid::Ala => "Ala",
            AminoAcid::Arg => "Arg",
            AminoAcid::Asn => "Asn",
            AminoAcid::Asp => "Asp",
            AminoAcid::Cys => "Cys",
            AminoAcid::Gln => "Gln",
            AminoAcid::Glu => "Glu",
            AminoAcid::Gly => "Gly",
            AminoAcid::His => "His",
            AminoAcid::Ile => "Ile",
            AminoAcid::Leu => "Leu",
            AminoAcid::Lys => "Lys",
            AminoAcid::Met => "Met",
            AminoAcid::Phe => "Phe",
            AminoAcid::Pro => "Pro",
            AminoAcid::Ser => "Ser",
            AminoAcid::Thr => "Thr",
            AminoAcid::Trp => "Trp",
            AminoAcid::Tyr => "Tyr",
            AminoAcid::Val => "Val",
            AminoAcid::Stop => "Ter",
        }
    }

    /// Whether this token is the stop signal.
    pub const fn is_stop(self) -> bool {
        matches!(self, AminoAcid::Stop)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AminoAcid {
    type Err = RiboError;

    /// Accepts one-letter codes, three-letter codes and `STOP`/`Ter`/`*`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        if s == "*" || s.eq_ignore_ascii_case("STOP") {
            return Ok(AminoAcid::Stop);
        }
        AminoAcid::ALL
            .into_iter()
            .find(|aa| s.eq_ignore_ascii_case(aa.symbol()) || s.eq_ignore_ascii_case(aa.three_letter()))
            .ok_or_else(|| RiboError::Parse(format!("unknown amino acid token '{s}'")))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AminoAcid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AminoAcid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Base indexing: U=0, C=1, A=2, G=3
// ---------------------------------------------------------------------------

/// RNA bases in table order.
pub const BASES: [u8; 4] = [b'U', b'C', b'A', b'G'];

/// Table index of an RNA base. Returns `None` outside `UCAG`.
#[inline]
pub fn base_index(b: u8) -> Option<usize> {
    match b {
        b'U' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Codon table
// ---------------------------------------------------------------------------

/// Standard genetic code, indexed `[first][second][third]`.
#[rustfmt::skip]
pub static CODON_TABLE: [[[AminoAcid; 4]; 4]; 4] = {
    use AminoAcid::{
        Ala as A, Arg as R, Asn as N, Asp as D, Cys as C, Gln as Q, Glu as E, Gly as G,
        His as H, Ile as I, Leu as L, Lys as K, Met as M, Phe as F, Pro as P, Ser as S,
        Stop as X, Thr as T, Trp as W, Tyr as Y, Val as V,
    };
    [
    // U__
    [[F, F, L, L],   // UU_
     [S, S, S, S],   // UC_
     [Y, Y, X, X],   // UA_
     [C, C, X, W]],  // UG_
    // C__
    [[L, L, L, L],
     [P, P, P, P],
     [H, H, Q, Q],
     [R, R, R, R]],
    // A__
    [[I, I, I, M],
     [T, T, T, T],
     [N, N, K, K],
     [S, S, R, R]],
    // G__
    [[V, V, V, V],
     [A, A, A, A],
     [D, D, E, E],
     [G, G, G, G]],
    ]
};

// ---------------------------------------------------------------------------
// Codon
// ---------------------------------------------------------------------------

/// A validated mRNA triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([u8; 3]);

impl Codon {
    /// The start codon, AUG.
    pub const START: Codon = Codon(*b"AUG");

    /// Build a codon from a 3-byte RNA slice.
    pub fn new(bases: &[u8]) -> Result<Self> {
        let bases: [u8; 3] = bases.try_into().map_err(|_| {
            RiboError::InvalidInput(format!("codon must be 3 bases, got {}", bases.len()))
        })?;
        if let Some((position, base)) = RnaAlphabet::first_invalid(&bases) {
            return Err(RiboError::InvalidBase {
                stage: "translate",
                alphabet: RnaAlphabet::NAME,
                base,
                position,
            });
        }
        Ok(Codon(bases))
    }

    /// Build a codon from three table indices, each in `0..4`.
    pub fn from_indices(first: usize, second: usize, third: usize) -> Result<Self> {
        let base = |i: usize| {
            BASES
                .get(i)
                .copied()
                .ok_or_else(|| RiboError::InvalidInput(format!("base index {i} out of range")))
        };
        Ok(Codon([base(first)?, base(second)?, base(third)?]))
    }

    /// The three bases.
    pub fn bases(&self) -> &[u8; 3] {
        &self.0
    }

    /// Per-position table indices.
    pub fn indices(&self) -> [usize; 3] {
        // Construction guarantees UCAG bases.
        self.0.map(|b| base_index(b).unwrap_or(0))
    }

    /// Amino acid encoded by this codon.
    pub fn amino_acid(&self) -> AminoAcid {
        let [x, y, z] = self.indices();
        CODON_TABLE[x][y][z]
    }

    /// Whether this is the AUG start codon.
    pub fn is_start(&self) -> bool {
        *self == Codon::START
    }

    /// Whether this codon terminates translation.
    pub fn is_stop(&self) -> bool {
        self.amino_acid().is_stop()
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Look up the amino acid for a 3-byte RNA codon.
pub fn lookup(codon: &[u8]) -> Result<AminoAcid> {
    Codon::new(codon).map(|c| c.amino_acid())
}

/// All 64 codons in table order (UUU, UUC, UUA, UUG, UCU, ...).
pub fn all_codons() -> impl Iterator<Item = Codon> {
    (0..64).map(|i| Codon([BASES[i >> 4], BASES[(i >> 2) & 3], BASES[i & 3]]))
}

/// Synonymous codons for an amino acid, in table order.
pub fn codons_for(aa: AminoAcid) -> Vec<Codon> {
    all_codons().filter(|c| c.amino_acid() == aa).collect()
}
