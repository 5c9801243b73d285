//! Raw sequence cleanup.
//!
//! Sequence text copied from a record listing (e.g. the numbered ORIGIN
//! block of a GenBank entry) carries position numbers, spaces and line
//! breaks. Cleaning removes ASCII digits and ASCII whitespace in one linear
//! pass and uppercases everything else. Any other character is kept so that
//! validation can report it.

/// Counts from a cleaning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanReport {
    pub input_bytes: usize,
    pub kept: usize,
    pub removed: usize,
}

#[inline]
fn is_noise(b: u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_whitespace()
}

/// Strip digits and whitespace, uppercase the rest.
pub fn clean(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .filter(|&&b| !is_noise(b))
        .map(u8::to_ascii_uppercase)
        .collect()
}

/// Like [`clean`], also returning how many bytes were dropped.
pub fn clean_with_report(raw: &[u8]) -> (Vec<u8>, CleanReport) {
    let cleaned = clean(raw);
    let report = CleanReport {
        input_bytes: raw.len(),
        kept: cleaned.len(),
        removed: raw.len() - cleaned.len(),
    };
    (cleaned, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_genbank_origin_layout() {
        let raw = b"        1 atgaaatagc gtacgtacgt\n       21 ttaa\n";
        assert_eq!(clean(raw), b"ATGAAATAGCGTACGTACGTTTAA");
    }

    #[test]
    fn handles_crlf_and_tabs() {
        assert_eq!(clean(b"at\tg\r\nc"), b"ATGC");
    }

    #[test]
    fn keeps_unexpected_symbols_for_validation() {
        assert_eq!(clean(b"ac-gn"), b"AC-GN");
    }

    #[test]
    fn empty_and_all_noise() {
        assert!(clean(b"").is_empty());
        assert!(clean(b" 123\n\n 456 ").is_empty());
    }

    #[test]
    fn report_counts() {
        let (cleaned, report) = clean_with_report(b"1 acg\n");
        assert_eq!(cleaned, b"ACG");
        assert_eq!(
            report,
            CleanReport {
                input_bytes: 6,
                kept: 3,
                removed: 3,
            }
        );
    }
}
