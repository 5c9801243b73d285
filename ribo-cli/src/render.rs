//! Text rendering of decoding results.

use std::fmt;

use clap::builder::styling::{AnsiColor, Effects, Style};
use clap::ColorChoice;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use ribo_seq::{all_codons, AminoAcid, Decoded, Polypeptide};

const START_STYLE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const STOP_STYLE: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);

/// Resolve a color choice against whether stdout is a terminal.
pub fn color_enabled(choice: ColorChoice, is_terminal: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_terminal,
    }
}

fn token_style(aa: AminoAcid) -> Option<Style> {
    match aa {
        AminoAcid::Met => Some(START_STYLE),
        AminoAcid::Stop => Some(STOP_STYLE),
        _ => None,
    }
}

/// Polypeptide tokens with `M` green and `STOP` red when `color` is set.
struct StyledChain<'a> {
    chain: &'a Polypeptide,
    color: bool,
}

impl fmt::Display for StyledChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &aa in self.chain.iter() {
            match token_style(aa).filter(|_| self.color) {
                Some(style) => write!(f, "{style}{}{style:#}", aa.symbol())?,
                None => f.write_str(aa.symbol())?,
            }
        }
        Ok(())
    }
}

/// Concatenated tokens, `M` green and `STOP` red when `color` is set.
pub fn render_polypeptide(chain: &Polypeptide, color: bool) -> String {
    StyledChain { chain, color }.to_string()
}

/// Text report for one decoded input.
pub struct Report<'a> {
    pub source: &'a str,
    pub decoded: &'a Decoded,
    pub show_strands: bool,
    pub color: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decoded = self.decoded;
        writeln!(f, "{:<32}{}", "Received buffer from", self.source)?;
        writeln!(
            f,
            "{:<32}{} bp",
            "DNA base pairs(nucleotides)",
            decoded.base_pairs()
        )?;
        writeln!(f, "{:<32}{:.2} kb", "Genome size", decoded.size_kb())?;
        writeln!(f)?;

        if self.show_strands {
            writeln!(f, "ORIGIN (CODING STRAND):\n{}\n", decoded.coding)?;
            writeln!(f, "COMPLEMENTARY DNA (TEMPLATE STRAND):\n{}\n", decoded.template)?;
            writeln!(f, "mRNA:\n{}\n", decoded.mrna)?;
        }

        writeln!(f, "Polypeptide chain or Protein:")?;
        writeln!(
            f,
            "{}",
            StyledChain {
                chain: &decoded.translation.polypeptide,
                color: self.color,
            }
        )
    }
}

/// Full text report for one decoded input.
pub fn render_report(source: &str, decoded: &Decoded, show_strands: bool, color: bool) -> String {
    Report {
        source,
        decoded,
        show_strands,
        color,
    }
    .to_string()
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

/// The 64-codon standard genetic code as a table.
pub fn codon_table(color: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    if !color {
        table.force_no_tty();
    }
    table.set_header(vec![
        header_cell("Codon"),
        header_cell("Amino acid"),
        header_cell("Abbrev"),
    ]);
    for codon in all_codons() {
        let aa = codon.amino_acid();
        let mut symbol = Cell::new(aa.symbol()).set_alignment(CellAlignment::Center);
        if color {
            match aa {
                AminoAcid::Met => symbol = symbol.fg(Color::Green),
                AminoAcid::Stop => symbol = symbol.fg(Color::Red),
                _ => {}
            }
        }
        table.add_row(vec![
            Cell::new(codon.to_string()),
            symbol,
            Cell::new(aa.three_letter()),
        ]);
    }
    table
}
