//! Subcommand implementations.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ribo_core::Summarizable;
use ribo_seq::{decode_raw, Decoded};

use crate::cli::{DecodeArgs, OutputFormatArg};
use crate::input::{read_input, RawInput};
use crate::render::{codon_table, render_report};

/// Clean and decode already-read input.
pub fn decode_input(input: &RawInput) -> Result<Decoded> {
    let _span = info_span!("decode", source = %input.source).entered();
    let decoded =
        decode_raw(&input.bytes).with_context(|| format!("failed to decode {}", input.source))?;
    info!("{}", decoded.summary());
    Ok(decoded)
}

/// Write the decoding of `input` to `out` in the requested format.
pub fn write_decoded<W: Write>(
    out: &mut W,
    input: &RawInput,
    decoded: &Decoded,
    args: &DecodeArgs,
    color: bool,
) -> Result<()> {
    match args.format {
        OutputFormatArg::Text => {
            let report = render_report(&input.source, decoded, args.show_strands, color);
            out.write_all(report.as_bytes())?;
        }
        OutputFormatArg::Json => {
            serde_json::to_writer_pretty(&mut *out, decoded)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// `ribo decode`.
pub fn run_decode<W: Write>(args: &DecodeArgs, color: bool, out: &mut W) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let decoded = decode_input(&input)?;
    write_decoded(out, &input, &decoded, args, color)
}

/// `ribo table`.
pub fn run_table<W: Write>(color: bool, out: &mut W) -> Result<()> {
    writeln!(out, "{}", codon_table(color))?;
    out.flush()?;
    Ok(())
}
