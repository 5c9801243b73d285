//! Integration tests for `ribo decode` against files on disk.

use std::io::Write;

use ribo_cli::cli::{DecodeArgs, OutputFormatArg};
use ribo_cli::commands::run_decode;

fn genome_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents).unwrap();
    f.flush().unwrap();
    f
}

fn run(args: &DecodeArgs) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run_decode(args, false, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn decodes_genbank_origin_file() {
    let f = genome_file(
        b"        1 atgtttgtga accaacacct gtgcggctca cacctggtgg aagctctcta cctagtgtgc\n       \
          61 ggggaacgag gcttcttcta cacacccaag acctaa\n",
    );
    let args = DecodeArgs {
        input: Some(f.path().to_path_buf()),
        show_strands: false,
        format: OutputFormatArg::Text,
    };
    let text = run(&args).unwrap();
    assert!(text.contains(&f.path().display().to_string()));
    assert!(text.contains("96 bp"));
    assert!(text.ends_with("MFVNQHLCGSHLVEALYLVCGERGFFYTPKTSTOP\n"));
}

#[test]
fn show_strands_prints_each_stage() {
    let f = genome_file(b"ATGAAATAG\n");
    let args = DecodeArgs {
        input: Some(f.path().to_path_buf()),
        show_strands: true,
        format: OutputFormatArg::Text,
    };
    let text = run(&args).unwrap();
    let coding = text.find("ATGAAATAG").unwrap();
    let template = text.find("TACTTTATC").unwrap();
    let mrna = text.find("AUGAAAUAG").unwrap();
    assert!(coding < template && template < mrna);
}

#[test]
fn json_output_parses() {
    let f = genome_file(b"atg aaa tag g\n");
    let args = DecodeArgs {
        input: Some(f.path().to_path_buf()),
        show_strands: false,
        format: OutputFormatArg::Json,
    };
    let text = run(&args).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["mrna"], "AUGAAAUAGG");
    assert_eq!(value["translation"]["incomplete"]["bases"], "G");
}

#[test]
fn invalid_base_fails_with_context() {
    let f = genome_file(b"ATGRYN\n");
    let args = DecodeArgs {
        input: Some(f.path().to_path_buf()),
        show_strands: false,
        format: OutputFormatArg::Text,
    };
    let err = run(&args).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("failed to decode"));
    assert!(message.contains("position 3"));
}

#[test]
fn missing_file_fails() {
    let args = DecodeArgs {
        input: Some("/nonexistent/ribo/input.txt".into()),
        show_strands: false,
        format: OutputFormatArg::Text,
    };
    assert!(run(&args).is_err());
}
