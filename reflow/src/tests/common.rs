use crate::{LineLedger, LineTerminator, OffsetEncoding};

/// Installs a test-writer subscriber so `RUST_LOG=reflow=trace` shows remap traces.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn lf_chars() -> LineLedger {
    LineLedger::new(LineTerminator::Lf, OffsetEncoding::Chars)
}

/// Replaces `lines[index]` and returns the length of the text it replaced.
pub fn replace(ledger: &LineLedger, lines: &mut [String], index: usize, text: &str) -> usize {
    let old_len = ledger.line_len(&lines[index]);
    lines[index] = text.to_string();
    old_len
}

pub fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
