//! Log events emitted while decoding, captured through the CLI subscriber.
//!
//! Installs the global subscriber, so this file holds a single test.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;

use ribo_cli::commands::decode_input;
use ribo_cli::input::RawInput;
use ribo_cli::logging::{init_logging_with_writer, LogConfig, LogFormat};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn raw(bytes: &[u8]) -> RawInput {
    RawInput {
        source: "mem".to_string(),
        bytes: bytes.to_vec(),
    }
}

#[test]
fn incomplete_codon_is_logged_at_warn() {
    let captured = Captured::default();
    let writer = captured.clone();
    let config = LogConfig {
        level_filter: LevelFilter::WARN,
        use_env_filter: false,
        with_ansi: false,
        format: LogFormat::Compact,
        ..LogConfig::default()
    };
    init_logging_with_writer(&config, move || writer.clone());

    decode_input(&raw(b"ATGAAATAG")).unwrap();
    assert!(captured.text().is_empty(), "complete codons log nothing at warn");

    let decoded = decode_input(&raw(b"ATGAAATA")).unwrap();
    assert_eq!(decoded.translation.polypeptide.to_string(), "MK");
    let logs = captured.text();
    assert!(logs.contains("WARN"));
    assert!(logs.contains("2 trailing base(s) 'UA' at offset 6 do not form a complete codon"));
    assert_eq!(logs.lines().count(), 1);
}
